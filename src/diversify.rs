//! Stagnation escape: a burst of unconditional random exchanges.
//!
//! Applied when the search has gone `perturbation_limit` iterations without
//! improving the best objective. The burst degrades the current coloring on
//! purpose; the tabu memory is wiped afterwards so the search restarts its
//! short-term history from the perturbed point. Class sizes are untouched,
//! so equity survives.

use crate::{solution::Solution, tabu::TabuMemory};
use rand::Rng;

/// Execute ⌊strength·n⌋ random exchange attempts. Each attempt draws two
/// vertices uniformly; pairs that coincide or share a color are skipped.
pub fn perturb<'g, R>(
    sol: &mut Solution<'g>,
    tabu: &mut TabuMemory,
    strength: f64,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    let n = sol.n();
    if n < 2 {
        return;
    }

    let count = (strength * n as f64) as usize;
    for _ in 0..count {
        let v1 = rng.gen_range(0..n);
        let v2 = rng.gen_range(0..n);
        if v1 != v2 && sol.color(v1) != sol.color(v2) {
            sol.apply_exchange(v1, v2);
        }
    }
    tabu.reset();
}
