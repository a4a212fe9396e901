//! Sub-pixel noise used to break up quantization patterns.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// Seedable noise source. Output is only reproducible in distribution unless a seed is given.
#[derive(Clone, Debug)]
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    /// Noise source seeded with `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Zero-mean Gaussian sample with standard deviation `sigma`.
    pub fn gaussian(&mut self, sigma: f64) -> f64 {
        if !sigma.is_finite() || sigma <= 0.0 {
            return 0.0;
        }
        let z: f64 = self.rng.sample(StandardNormal);
        z * sigma
    }

    /// Uniform sample in `[-half_width, half_width)`.
    pub fn uniform(&mut self, half_width: f64) -> f64 {
        if !half_width.is_finite() || half_width <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-half_width..half_width)
    }
}
