//! Tabu-search attempt for one fixed k: drive [`improve_once`] until the
//! coloring is conflict-free or a termination condition fires.
//!
//! The attempt ends *solved* as soon as the objective reaches zero, and
//! *not solved* on the iteration cap, on time-up (the stop oracle is polled
//! every 128 iterations), or when no admissible candidate is left.

use crate::{
    diversify::perturb,
    neighbour::improve_once,
    params::Params,
    solution::Solution,
    stop::StopCriterion,
    tabu::TabuMemory,
};
use rand::Rng;

/// Outcome of a single fixed-k attempt.
#[derive(Clone, Copy, Debug)]
pub struct AttemptResult {
    /// True iff a proper equitable coloring was reached (obj = 0).
    pub solved: bool,
    /// Iterations executed, perturbation steps included.
    pub iterations: u64,
    /// Best objective observed during the attempt.
    pub final_obj: usize,
}

/// Run the tabu search on `sol` until it is solved or gives up.
pub fn run_attempt<'g, R>(
    sol: &mut Solution<'g>,
    p: &Params,
    stop: &StopCriterion,
    rng: &mut R,
) -> AttemptResult
where
    R: Rng + ?Sized,
{
    debug_assert!(sol.validate_consistency());
    debug_assert!(sol.is_equitable());

    if sol.obj() == 0 {
        return AttemptResult { solved: true, iterations: 0, final_obj: 0 };
    }

    let mut tabu = TabuMemory::new(sol.n(), sol.k());
    let mut best_obj = sol.obj();
    let mut iter = 0usize;
    let mut no_improve = 0usize;

    while iter < p.max_iter && sol.obj() > 0 {
        if iter % 128 == 0 && stop.is_time_up() {
            break;
        }

        if no_improve >= p.perturbation_limit && p.perturbation_strength > 0.0 {
            perturb(sol, &mut tabu, p.perturbation_strength, rng);
            no_improve = 0;
            iter += 1;
            continue;
        }

        if !improve_once(sol, &mut tabu, iter, best_obj, p, rng) {
            // neighborhood exhausted, nothing admissible left
            break;
        }

        if sol.obj() < best_obj {
            best_obj = sol.obj();
            no_improve = 0;
        } else {
            no_improve += 1;
        }
        iter += 1;
    }

    AttemptResult {
        solved: best_obj == 0,
        iterations: iter as u64,
        final_obj: best_obj,
    }
}

/*──────────────────────── tests ───────────────────────────*/
