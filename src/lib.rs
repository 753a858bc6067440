//! eqcol – tabu search for the equitable graph coloring problem.
//!
//! A k-coloring is *equitable* when every class is an independent set and
//! the class sizes differ by at most one. The solver answers the
//! feasibility question "does a proper equitable k-coloring exist?" with a
//! tabu search over a conflict-minimisation reformulation, and wraps it in
//! a descent that starts at k = Δ+1 and decrements k after every success,
//! warm-starting each attempt from the previous solution.

pub mod construct;
pub mod descent;
pub mod diversify;
pub mod generator;
pub mod graph;
pub mod neighbour;
pub mod params;
pub mod report;
pub mod search;
pub mod solution;
pub mod stop;
pub mod tabu;

pub use descent::{run_descent, DescentReport};
pub use graph::{InputError, Instance};
pub use params::Params;
pub use search::{run_attempt, AttemptResult};
pub use solution::Solution;
pub use stop::StopCriterion;
