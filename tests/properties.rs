//! Structural invariants of the coloring state under random graphs and
//! random mutation sequences: cached counters must always agree with a
//! from-scratch recount, equity must survive every engine-legal step, and
//! delta evaluation must predict the applied objective exactly.

use eqcol::construct::{greedy_from_previous, greedy_initial};
use eqcol::{Instance, Solution};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Instance {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(p) {
                edges.push((a, b));
            }
        }
    }
    Instance::from_edge_list(n, &edges)
}

/// Apply one random engine-legal mutation (an equity-preserving Move or an
/// Exchange), first checking that the evaluated delta matches the applied
/// objective. Returns false when the current state offers no such step.
fn random_step<R: Rng + ?Sized>(sol: &mut Solution<'_>, rng: &mut R) -> bool {
    let n = sol.n();

    if rng.gen_bool(0.5) && sol.r() > 0 {
        // Move from a big class into a small class
        let movable: Vec<usize> = (0..n)
            .filter(|&v| sol.class_size(sol.color(v)) == sol.big_size())
            .collect();
        let targets: Vec<usize> = (0..sol.k())
            .filter(|&c| sol.class_size(c) == sol.floor_size())
            .collect();
        if let (Some(&v), Some(&to)) = (movable.choose(rng), targets.choose(rng)) {
            let before = sol.obj() as i64;
            let delta = sol.move_delta(v, to);
            sol.apply_move(v, to);
            assert_eq!(sol.obj() as i64, before + delta);
            return true;
        }
        false
    } else {
        let v = rng.gen_range(0..n);
        let partners: Vec<usize> =
            (0..n).filter(|&u| sol.color(u) != sol.color(v)).collect();
        if let Some(&u) = partners.choose(rng) {
            let before = sol.obj() as i64;
            let delta = sol.exchange_delta(v, u);
            sol.apply_exchange(v, u);
            assert_eq!(sol.obj() as i64, before + delta);
            return true;
        }
        false
    }
}

#[test]
fn invariants_survive_random_mutation_sequences() {
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    for trial in 0..20 {
        let n = rng.gen_range(8..40);
        let g = random_graph(n, 0.3, &mut rng);
        let k = rng.gen_range(2..=n.min(8));
        let mut sol = greedy_initial(&g, k, &mut rng);
        assert!(sol.validate_consistency());
        assert!(sol.is_equitable());

        for step in 0..60 {
            if !random_step(&mut sol, &mut rng) {
                continue;
            }
            assert!(
                sol.validate_consistency(),
                "trial {trial} step {step}: cached state diverged"
            );
            assert!(sol.is_equitable(), "trial {trial} step {step}: equity broken");
        }
    }
}

#[test]
fn conflicting_list_matches_conflict_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(200);
    let g = random_graph(25, 0.4, &mut rng);
    let mut sol = greedy_initial(&g, 4, &mut rng);

    for _ in 0..80 {
        random_step(&mut sol, &mut rng);
        for v in 0..sol.n() {
            let listed = sol.conflicting().contains(&v);
            assert_eq!(listed, sol.conflict_count(v) > 0);
        }
        let half_sum: usize = (0..sol.n()).map(|v| sol.conflict_count(v)).sum();
        assert_eq!(sol.obj(), half_sum / 2);
    }
}

#[test]
fn double_exchange_restores_the_state_exactly() {
    let mut rng = ChaCha8Rng::seed_from_u64(300);
    let g = random_graph(20, 0.35, &mut rng);
    let mut sol = greedy_initial(&g, 5, &mut rng);

    for _ in 0..40 {
        let v = rng.gen_range(0..20);
        let partners: Vec<usize> =
            (0..20).filter(|&u| sol.color(u) != sol.color(v)).collect();
        let Some(&u) = partners.choose(&mut rng) else { continue };

        let snapshot = sol.clone();
        sol.apply_exchange(v, u);
        sol.apply_exchange(v, u);

        assert_eq!(sol.colors(), snapshot.colors());
        assert_eq!(sol.obj(), snapshot.obj());
        for c in 0..sol.k() {
            assert_eq!(sol.class_size(c), snapshot.class_size(c));
        }
        for w in 0..sol.n() {
            assert_eq!(sol.conflict_count(w), snapshot.conflict_count(w));
        }
    }
}

#[test]
fn moving_to_the_same_color_changes_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(400);
    let g = random_graph(18, 0.4, &mut rng);
    let mut sol = greedy_initial(&g, 4, &mut rng);

    for v in 0..sol.n() {
        let snapshot = sol.clone();
        let c = sol.color(v);
        sol.apply_move(v, c);
        assert_eq!(sol.colors(), snapshot.colors());
        assert_eq!(sol.obj(), snapshot.obj());
        assert!(sol.validate_consistency());
    }
}

#[test]
fn from_scratch_constructor_is_equitable_for_every_k() {
    let mut rng = ChaCha8Rng::seed_from_u64(500);
    for &n in &[1usize, 2, 7, 12, 23] {
        let g = random_graph(n, 0.5, &mut rng);
        for k in 1..=n {
            let sol = greedy_initial(&g, k, &mut rng);
            assert!(sol.validate_consistency(), "n={n} k={k}");
            assert!(sol.is_equitable(), "n={n} k={k}");
        }
    }
}

#[test]
fn warm_start_constructor_is_equitable_and_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(600);
    for trial in 0..15 {
        let n = rng.gen_range(6..30);
        let g = random_graph(n, 0.3, &mut rng);
        let k_prev = rng.gen_range(2..=n.min(9));
        let prev = greedy_initial(&g, k_prev, &mut rng);

        let sol = greedy_from_previous(&prev, &mut rng);
        assert_eq!(sol.k(), k_prev - 1);
        assert!(sol.validate_consistency(), "trial {trial}");
        assert!(sol.is_equitable(), "trial {trial}");
    }
}
