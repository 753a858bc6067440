//! Equity-preserving greedy constructors.
//!
//! • `greedy_initial` – build a k-coloring from scratch (possibly with
//!   conflicts, never with unbalanced classes).
//! • `greedy_from_previous` – warm-start a k-coloring from a solved
//!   (k+1)-coloring by dropping one class and re-coloring its vertices.
//!
//! Both return a ready-to-search [`Solution`].

use crate::{graph::Instance, solution::Solution};
use rand::seq::SliceRandom;
use rand::Rng;

/// Color one vertex by the shared per-vertex rule: among the classes still
/// below the current cap, take the smallest index that creates no conflict,
/// else draw uniformly. `r_tilde` tracks how many classes reached the big
/// size so far; while it is short of `r` the cap stays at the big size.
fn place_greedy<'g, R>(sol: &mut Solution<'g>, v: usize, r_tilde: &mut usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let cap = if *r_tilde < sol.r() { sol.big_size() } else { sol.floor_size() };

    let open: Vec<usize> = (0..sol.k()).filter(|&c| sol.class_size(c) < cap).collect();
    debug_assert!(!open.is_empty());

    let mut chosen = None;
    for &c in &open {
        let clash = sol
            .instance()
            .neighbours(v)
            .iter()
            .any(|&u| sol.color(u) == c);
        if !clash {
            chosen = Some(c);
            break;
        }
    }
    let c = match chosen {
        Some(c) => c,
        None => match open.choose(rng) {
            Some(&c) => c,
            // capacity math guarantees an open class; keep the smallest
            // class as a safety net
            None => (0..sol.k()).min_by_key(|&c| sol.class_size(c)).unwrap(),
        },
    };

    sol.place(v, c);
    if sol.class_size(c) == sol.big_size() {
        *r_tilde += 1;
    }
}

/// Greedy-from-scratch constructor: visit the vertices in uniformly random
/// order and color each by the capped first-fit rule. The result is always
/// equitable; conflicts are tolerated and tracked incrementally.
pub fn greedy_initial<'g, R>(inst: &'g Instance, k: usize, rng: &mut R) -> Solution<'g>
where
    R: Rng + ?Sized,
{
    let mut sol = Solution::new(inst, k);
    let mut order: Vec<usize> = (0..inst.n()).collect();
    order.shuffle(rng);

    let mut r_tilde = 0usize;
    for v in order {
        place_greedy(&mut sol, v, &mut r_tilde, rng);
    }

    debug_assert!(sol.validate_consistency());
    debug_assert!(sol.is_equitable());
    sol
}

/// Warm-start constructor: draw a random permutation of the k+1 previous
/// classes, drop the one landing last, remap the survivors onto {0,…,k−1}
/// and greedily re-color the orphaned vertices. The inherited conflict
/// state is carried forward instead of being recomputed.
pub fn greedy_from_previous<'g, R>(prev: &Solution<'g>, rng: &mut R) -> Solution<'g>
where
    R: Rng + ?Sized,
{
    let prev_k = prev.k();
    assert!(prev_k >= 2);
    let k = prev_k - 1;
    let mut sol = Solution::new(prev.instance(), k);

    let mut perm: Vec<usize> = (0..prev_k).collect();
    perm.shuffle(rng);
    let removed = perm[prev_k - 1];
    let mut color_map = vec![usize::MAX; prev_k];
    for (target, &old) in perm[..k].iter().enumerate() {
        color_map[old] = target;
    }

    sol.inherit(prev, removed, &color_map);

    let mut orphans: Vec<usize> =
        (0..prev.n()).filter(|&v| prev.color(v) == removed).collect();
    orphans.shuffle(rng);

    // inherited classes may already sit at the big size
    let mut r_tilde = (0..k)
        .filter(|&c| sol.class_size(c) >= sol.big_size())
        .count();

    for v in orphans {
        place_greedy(&mut sol, v, &mut r_tilde, rng);
    }

    debug_assert!(sol.validate_consistency());
    debug_assert!(sol.is_equitable());
    sol
}

/*──────────────────────── tests ───────────────────────────*/
