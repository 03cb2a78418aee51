//! Model Constants for poolsim
//!
//! Named constants shared by the lifecycle checks, the thermal model and the
//! noise injector. Values are part of the model's observable contract:
//! changing any of them changes what downstream monitoring software will see.

// ===== TEMPERATURE BOUNDS =====

/// Lowest water temperature accepted by `reset_pool` and `open_pipe` (°C).
///
/// The model describes liquid water near freezing; readings below this are
/// rejected at the API boundary, not clamped.
pub const WATER_TEMP_MIN_C: f64 = 1.0;

/// Highest water temperature accepted by `reset_pool` and `open_pipe` (°C).
///
/// Boiling point at sea level. The bound applies to inputs only - the decay
/// and noise paths may produce readings outside it, as real faulty sensors do.
pub const WATER_TEMP_MAX_C: f64 = 100.0;

// ===== CLOCK =====

/// Value of the internal clock right after construction or `reset_pool`.
///
/// The clock starts at 1 rather than 0 so it can be fed straight back into
/// the logarithmic decay curve and the inlet read without a zero-time guard.
pub const INITIAL_ELAPSED_TIME: f64 = 1.0;

// ===== THERMAL DECAY =====

/// Reference duration that normalizes the decay curve's time axis.
///
/// The steady-phase reading scales with `ln(t / 60)`: one reference period
/// is the neutral point, shorter query times sit above the stored
/// temperature and longer ones relax toward ambient.
pub const DECAY_REFERENCE_TIME: f64 = 60.0;

// ===== NOISE / ANOMALY INJECTION =====

/// Exclusive upper bound of the anomaly lottery draw (1..1000, 999 outcomes).
pub const ANOMALY_DRAW_BOUND: u32 = 1000;

/// The single winning outcome of the anomaly lottery.
///
/// Exactly one outcome in 999 triggers a glitch reading, ~0.1% of reads.
pub const ANOMALY_DRAW_HIT: u32 = 73;

/// Exclusive upper bound for both integer parts of a glitch reading.
///
/// Glitch readings are `u + v/100` with `u, v` drawn from 1..100, so they
/// land in [1.01, 99.99] regardless of the true water temperature.
pub const ANOMALY_VALUE_BOUND: u32 = 100;

/// Gaussian spread applied when the pool has not been recently disturbed.
pub const BASE_NOISE_SIGMA: f64 = 1.0;
