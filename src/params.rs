//! Parameter bundle for the tabu search.
//!
//! Defaults follow the solver's command-line defaults:
//! α = 0.6, β = 10, aspiration on, perturbation after 1000 stale
//! iterations at strength 0.16, per-attempt cap of 10⁷ iterations.

/// All tunable controls for one descent run.
#[derive(Clone, Debug)]
pub struct Params {
    /// Hard cap on iterations within a single fixed-k attempt.
    pub max_iter: usize,

    /// Dynamic tenure coefficient on the conflicting-vertex count.
    pub alpha: f64,

    /// Upper bound (inclusive) of the uniform additive tenure term.
    pub beta: usize,

    /// Iterations without a new best objective before a perturbation fires.
    pub perturbation_limit: usize,

    /// Fraction of n used as the perturbation exchange count.
    /// 0 disables perturbation entirely.
    pub perturbation_strength: f64,

    /// Allow tabu candidates that would strictly improve the best
    /// objective seen in the attempt.
    pub aspiration: bool,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_iter: 10_000_000,
            alpha: 0.6,
            beta: 10,
            perturbation_limit: 1_000,
            perturbation_strength: 0.16,
            aspiration: true,
        }
    }
}
