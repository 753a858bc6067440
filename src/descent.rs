//! Outer descent on the color count.
//!
//! Start at k = Δ+1, where an equitable coloring always exists
//! (Hajnal–Szemerédi), and keep decrementing k while the tabu search proves
//! each value feasible. Every success is snapshotted by value; the next
//! attempt warm-starts from it. The loop ends on the time limit, on k = 1,
//! or on the first attempt that fails.

use crate::{
    construct::{greedy_from_previous, greedy_initial},
    graph::Instance,
    params::Params,
    search::run_attempt,
    solution::Solution,
    stop::StopCriterion,
};
use rand::Rng;

/// Final outcome of a descent run.
#[derive(Clone, Debug)]
pub struct DescentReport {
    /// Starting color count Δ+1.
    pub initial_k: usize,
    /// Smallest k proven feasible; equals `initial_k` when no attempt
    /// succeeded within the budget.
    pub best_k: usize,
    /// Witness coloring for `best_k` (`None` when nothing was solved).
    pub best_coloring: Option<Vec<usize>>,
    /// Tabu iterations summed over all attempts.
    pub total_iterations: u64,
    /// Wall-clock seconds consumed.
    pub elapsed_secs: f64,
    /// 100·(initial_k − best_k)/initial_k.
    pub deviation_pct: f64,
}

/// Run the full descent on `inst` within the budget of `stop`.
pub fn run_descent<'g, R>(
    inst: &'g Instance,
    p: &Params,
    stop: &StopCriterion,
    rng: &mut R,
) -> DescentReport
where
    R: Rng + ?Sized,
{
    let initial_k = inst.max_degree() + 1;
    let mut current = greedy_initial(inst, initial_k, rng);

    let mut best: Option<Solution<'g>> = None;
    let mut total_iterations = 0u64;

    while !stop.is_time_up() {
        let k = current.k();
        let result = run_attempt(&mut current, p, stop, rng);
        total_iterations += result.iterations;

        if result.solved {
            tracing::info!(
                k,
                iterations = result.iterations,
                elapsed = stop.elapsed(),
                "feasible equitable coloring found"
            );
            best = Some(current.clone());
            if k == 1 {
                break;
            }
            current = greedy_from_previous(best.as_ref().unwrap(), rng);
        } else {
            tracing::debug!(
                k,
                iterations = result.iterations,
                final_obj = result.final_obj,
                "attempt failed, descent stops"
            );
            break;
        }
    }

    let best_k = best.as_ref().map_or(initial_k, Solution::k);
    let deviation_pct = if initial_k > 0 {
        100.0 * (initial_k - best_k) as f64 / initial_k as f64
    } else {
        0.0
    };

    DescentReport {
        initial_k,
        best_k,
        best_coloring: best.map(|s| s.colors().to_vec()),
        total_iterations,
        elapsed_secs: stop.elapsed(),
        deviation_pct,
    }
}

/*──────────────────────── tests ───────────────────────────*/
