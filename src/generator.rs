//! Synthetic instances with a planted equitable k-partition.
//!
//! Ground-truth colors are `i mod k` shuffled, so the class sizes differ by
//! at most one. Edges only ever connect different classes, which keeps the
//! planted partition proper; each cross-class pair is included with the
//! requested density. One representative per class is additionally wired
//! into a k-clique, so no coloring with fewer than k classes exists and the
//! planted k is exactly the chromatic number.

use crate::graph::Instance;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, Write};

/// Generate a planted instance. `density` is the probability of each
/// cross-class edge and must lie in [0, 1].
pub fn planted_instance<R>(n: usize, k: usize, density: f64, rng: &mut R) -> Instance
where
    R: Rng + ?Sized,
{
    assert!(k >= 1 && k <= n);
    assert!((0.0..=1.0).contains(&density));

    let mut color: Vec<usize> = (0..n).map(|i| i % k).collect();
    color.shuffle(rng);

    let mut edges: Vec<(usize, usize)> = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if color[i] != color[j] && rng.gen_bool(density) {
                edges.push((i, j));
            }
        }
    }

    // k-clique over one representative per class pins the lower bound
    let mut reps = vec![usize::MAX; k];
    for (v, &c) in color.iter().enumerate() {
        if reps[c] == usize::MAX {
            reps[c] = v;
        }
    }
    for a in 0..k {
        for b in a + 1..k {
            edges.push((reps[a].min(reps[b]), reps[a].max(reps[b])));
        }
    }

    Instance::from_edge_list(n, &edges)
}

/// Write `inst` in the plain-text format the reader consumes:
/// `n m` header, then one 1-based pair per line.
pub fn write_instance<W: Write>(w: &mut W, inst: &Instance) -> io::Result<()> {
    let edges = inst.edge_list();
    writeln!(w, "{} {}", inst.n(), edges.len())?;
    for (a, b) in edges {
        writeln!(w, "{} {}", a + 1, b + 1)?;
    }
    Ok(())
}

/*──────────────────────── tests ───────────────────────────*/
