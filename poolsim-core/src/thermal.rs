//! Mixing Phase and Thermal Relaxation Model
//!
//! ## Overview
//!
//! The pool is a single well-mixed reservoir with one scalar temperature.
//! After a disturbance (full reset or pipe-open) the water takes
//! `volume / mixing_speed` time units to recirculate; until then a sensor
//! sees the transient regime, afterwards readings follow a logarithmic
//! relaxation toward ambient temperature.
//!
//! Everything here is a pure function of its arguments. The phase decision
//! carries no memory: each sensor read re-evaluates it against the query
//! time, so there is no transition event to miss or replay.
//!
//! ## Relaxation curve
//!
//! With `d = water - ambient` and `L = ln(t / 60)`:
//!
//! - `d > 1`: `water - (d / ln d) * L` - cooling toward ambient
//! - `d < 1`: `water + (-d / ln |d|) / 2 * L`, clamped from above to
//!   ambient - warming toward ambient, half as fast, never overshooting
//! - `d == 1` exactly: `water` unchanged (degenerate band)
//!
//! Query times below the 60-unit reference make `L` negative, which pushes
//! the `d > 1` branch *above* the stored temperature. That is the modelled
//! behavior, not a bug: the curve is anchored so that one reference period
//! is the neutral point.
//!
//! `|d|` of exactly 0 or 1 lands on a log-domain edge. The function stays
//! total under IEEE-754: `ln 0 = -inf` collapses the correction term to
//! zero, and the `ln 1 = 0` denominator yields an infinity that the ambient
//! clamp absorbs for query times past the reference. No branch panics.

use crate::constants::DECAY_REFERENCE_TIME;

/// Which formula regime a sensor read falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixingPhase {
    /// Water has not yet fully recirculated since the last disturbance
    Transient,
    /// Pool is homogeneously mixed; readings follow the relaxation curve
    Steady,
}

/// Classify a query time against the pool's time-to-full-mix.
///
/// The threshold itself (`volume / mixing_speed`) belongs to the pool state;
/// this function only encodes the inclusive comparison so both sensors agree
/// on the boundary case `query_time == time_to_full_mix` (still transient).
pub fn mixing_phase(query_time: f64, time_to_full_mix: f64) -> MixingPhase {
    if query_time <= time_to_full_mix {
        MixingPhase::Transient
    } else {
        MixingPhase::Steady
    }
}

/// Steady-phase ideal reading: relax `water` toward `ambient` at time `t`.
///
/// Caller guarantees `t > 0`; the boundary check lives at the API surface.
pub fn relax_toward_ambient(water: f64, ambient: f64, t: f64) -> f64 {
    let d = water - ambient;
    let l = libm::log(t / DECAY_REFERENCE_TIME);

    if d > 1.0 {
        water - (d / libm::log(d)) * l
    } else if d < 1.0 {
        let ans = water + ((-d) / libm::log(libm::fabs(d))) / 2.0 * l;
        // Warming must not overshoot past ambient
        if ans > ambient {
            ambient
        } else {
            ans
        }
    } else {
        water
    }
}
