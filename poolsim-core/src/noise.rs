//! Noise and Anomaly Injection
//!
//! ## Overview
//!
//! Real sensors are never clean. This module perturbs the ideal temperature
//! computed by the thermal model in two ways:
//!
//! - **Gaussian jitter**: every reading gets noise whose spread tracks how
//!   hard the pool was recently disturbed. While the water is still
//!   recirculating, the spread is `ln |water - previous|`; once settled (or
//!   when nothing changed) it falls back to a unit spread. Big temperature
//!   swings produce noisy readings - a phenomenological heuristic, not a
//!   first-principles model.
//! - **Glitch readings**: a 1-in-999 lottery per read replaces the value
//!   entirely with `u + v/100` (`u`, `v` uniform in 1..=99), simulating a
//!   gross sensor fault independent of the water state.
//!
//! ## Determinism
//!
//! The generator is owned by the injector and seeded explicitly, so a fixed
//! seed replays the exact same reading sequence - the property regression
//! tests rely on. Nothing in this crate touches a global RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::constants::{
    ANOMALY_DRAW_BOUND, ANOMALY_DRAW_HIT, ANOMALY_VALUE_BOUND, BASE_NOISE_SIGMA,
};

/// Round a reading to two decimal places, the sensors' reported precision.
pub(crate) fn round2(x: f64) -> f64 {
    libm::round(x * 100.0) / 100.0
}

/// Seedable source of sensor jitter and glitch readings
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    rng: StdRng,
}

impl NoiseInjector {
    /// Injector seeded from OS entropy
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Injector with an explicit seed for reproducible runs
    ///
    /// Two injectors with the same seed produce identical reading sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Perturb an ideal reading.
    ///
    /// `recent_swing` carries the water-vs-previous temperature delta when
    /// the pool is still in its transient phase and the two differ; `None`
    /// selects the unit base spread.
    ///
    /// Swings of magnitude below one make the log negative and `Normal`
    /// rejects negative spreads, so the magnitude of the log is used.
    pub fn perturb(&mut self, ideal: f64, recent_swing: Option<f64>) -> f64 {
        if self.rng.gen_range(1..ANOMALY_DRAW_BOUND) == ANOMALY_DRAW_HIT {
            return self.glitch();
        }

        let sigma = match recent_swing {
            Some(swing) => libm::fabs(libm::log(libm::fabs(swing))),
            None => BASE_NOISE_SIGMA,
        };

        match Normal::new(ideal, sigma) {
            Ok(dist) => round2(dist.sample(&mut self.rng)),
            // Unusable spread (NaN from a NaN swing): report the ideal rather than panic
            Err(_) => round2(ideal),
        }
    }

    /// Gross fault reading, unrelated to the actual water temperature.
    fn glitch(&mut self) -> f64 {
        let whole = self.rng.gen_range(1..ANOMALY_VALUE_BOUND) as f64;
        let cents = self.rng.gen_range(1..ANOMALY_VALUE_BOUND) as f64 / 100.0;
        whole + cents
    }
}

#[cfg(feature = "std")]
impl Default for NoiseInjector {
    fn default() -> Self {
        Self::new()
    }
}
