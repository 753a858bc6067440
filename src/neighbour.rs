//! One tabu-search iteration: enumerate the equitable neighborhood of the
//! current coloring, keep the admissible candidates tying the best delta,
//! execute one of them at random and stamp the tabu memory.
//!
//! Two move kinds cover the neighborhood. *Move* transfers a conflicting
//! vertex from a big class to a small class and is only available when
//! n mod k ≠ 0 (otherwise it would unbalance the classes). *Exchange*
//! swaps the colors of a conflicting vertex with any differently-colored
//! vertex and never changes class sizes.

use crate::{
    params::Params,
    solution::Solution,
    tabu::{dynamic_tenure, TabuMemory},
};
use rand::seq::SliceRandom;
use rand::Rng;

/// An admissible neighbor of the current coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate {
    /// Transfer `v` into class `to` (big class → small class).
    Move { v: usize, to: usize },
    /// Swap the colors of `v` and `u`.
    Exchange { v: usize, u: usize },
}

/// Attempt a single best-improvement step at iteration `iter`.
///
/// A candidate is admissible iff it is non-tabu, or aspiration is enabled
/// and it would land strictly below `best_obj`. Ties on the best delta are
/// broken uniformly at random. Returns `false` when no admissible candidate
/// exists (the attempt must then stop).
pub fn improve_once<'g, R>(
    sol: &mut Solution<'g>,
    tabu: &mut TabuMemory,
    iter: usize,
    best_obj: usize,
    p: &Params,
    rng: &mut R,
) -> bool
where
    R: Rng + ?Sized,
{
    let n = sol.n();
    let k = sol.k();
    let obj = sol.obj() as i64;
    let best = best_obj as i64;

    let mut best_delta = i64::MAX;
    let mut candidates: Vec<Candidate> = Vec::new();

    let consider = |cand: Candidate, delta: i64, is_tabu: bool,
                        candidates: &mut Vec<Candidate>, best_delta: &mut i64| {
        let aspires = p.aspiration && obj + delta < best;
        if is_tabu && !aspires {
            return;
        }
        if delta < *best_delta {
            *best_delta = delta;
            candidates.clear();
            candidates.push(cand);
        } else if delta == *best_delta {
            candidates.push(cand);
        }
    };

    // Move: conflicting v in a big class into any small class. Only when
    // the class sizes actually differ.
    if sol.r() > 0 {
        for &v in sol.conflicting() {
            let c_v = sol.color(v);
            if sol.class_size(c_v) != sol.big_size() {
                continue;
            }
            for j in 0..k {
                if sol.class_size(j) != sol.floor_size() {
                    continue;
                }
                let delta = sol.move_delta(v, j);
                let is_tabu = tabu.is_tabu(v, j, iter);
                consider(Candidate::Move { v, to: j }, delta, is_tabu,
                         &mut candidates, &mut best_delta);
            }
        }
    }

    // Exchange: conflicting v against every differently-colored u. When u
    // is itself conflicting the pair (u,v) is enumerated from u's side too;
    // skip the half with the larger color to kill the symmetry.
    for &v in sol.conflicting() {
        let c_v = sol.color(v);
        for u in 0..n {
            if u == v {
                continue;
            }
            let c_u = sol.color(u);
            if c_u == c_v {
                continue;
            }
            if sol.is_conflicting(u) && c_u > c_v {
                continue;
            }
            let delta = sol.exchange_delta(v, u);
            let is_tabu = tabu.is_tabu(v, c_u, iter) || tabu.is_tabu(u, c_v, iter);
            consider(Candidate::Exchange { v, u }, delta, is_tabu,
                     &mut candidates, &mut best_delta);
        }
    }

    let Some(&chosen) = candidates.choose(rng) else {
        return false;
    };

    let tenure = dynamic_tenure(p.alpha, p.beta, sol.conflicting().len(), rng);
    match chosen {
        Candidate::Move { v, to } => {
            let old_c = sol.color(v);
            sol.apply_move(v, to);
            tabu.forbid(v, old_c, iter + tenure);
        }
        Candidate::Exchange { v, u } => {
            let c_v_old = sol.color(v);
            let c_u_old = sol.color(u);
            sol.apply_exchange(v, u);
            tabu.forbid(v, c_v_old, iter + tenure);
            tabu.forbid(u, c_u_old, iter + tenure);
        }
    }
    true
}
