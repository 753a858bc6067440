//! Short-term tabu memory with *dynamic* tenure.
//!
//! One expiry stamp per (vertex, color) pair, flattened to a 1-D buffer.
//! A pair is tabu at iteration `iter` iff its stamp is strictly greater
//! than `iter`; 0 means never forbidden. The tenure is recomputed for every
//! executed move from the current conflict level:
//!     tenure = ⌊α·|C(s)|⌋ + U{0,…,β}.

use rand::Rng;

#[derive(Clone, Debug)]
pub struct TabuMemory {
    /// expiry[v·k + c]: iteration until which color c is forbidden for v.
    expiry: Vec<usize>,
    k: usize,
}

impl TabuMemory {
    /// All-clear memory for n vertices and k colors.
    pub fn new(n: usize, k: usize) -> Self {
        Self { expiry: vec![0; n * k], k }
    }

    #[inline]
    pub fn is_tabu(&self, v: usize, c: usize, iter: usize) -> bool {
        self.expiry[v * self.k + c] > iter
    }

    /// Forbid assigning color c to v until `until` (exclusive).
    #[inline]
    pub fn forbid(&mut self, v: usize, c: usize, until: usize) {
        self.expiry[v * self.k + c] = until;
    }

    /// Wipe the whole memory (after a perturbation).
    pub fn reset(&mut self) {
        self.expiry.fill(0);
    }
}

/// Draw the tenure for the move being executed: ⌊α·|C(s)|⌋ plus a uniform
/// integer from {0,…,β} inclusive.
pub fn dynamic_tenure<R>(alpha: f64, beta: usize, conflicting: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    (alpha * conflicting as f64) as usize + rng.gen_range(0..=beta)
}

/*──────────── unit tests ────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stamp_logic() {
        let mut t = TabuMemory::new(3, 2);
        assert!(!t.is_tabu(1, 0, 0));

        t.forbid(1, 0, 3); // forbidden while iter < 3
        assert!(t.is_tabu(1, 0, 0));
        assert!(t.is_tabu(1, 0, 2));
        assert!(!t.is_tabu(1, 0, 3));
        assert!(!t.is_tabu(1, 1, 0));

        t.reset();
        assert!(!t.is_tabu(1, 0, 0));
    }

    #[test]
    fn tenure_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let t = dynamic_tenure(0.6, 10, 20, &mut rng);
            assert!((12..=22).contains(&t));
        }
        let t = dynamic_tenure(0.6, 0, 0, &mut rng);
        assert_eq!(t, 0);
    }
}
