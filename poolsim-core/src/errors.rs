//! Error Types for Pool Model Precondition Failures
//!
//! Every failure is an immediate, synchronous rejection of a bad argument:
//! operations either fully apply or fully reject, there is no partial state
//! and no recovery path. Callers are expected to treat these as programming
//! errors caught at the boundary.
//!
//! The enum is kept `Copy` and allocation-free so it can be returned from
//! hot read paths and formatted on `no_std` targets.
//!
//! ## Error Categories
//!
//! - [`PoolError::InvalidTemperature`]: temperature argument outside the
//!   accepted [1, 100] °C band
//! - [`PoolError::InvalidVolume`]: pipe volume not in `(0, capacity]`
//! - [`PoolError::InvalidTime`]: non-positive time argument to a sensor read

use thiserror_no_std::Error;

/// Result type for pool model operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Precondition violations raised at the model boundary
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolError {
    /// Temperature argument outside the accepted water temperature band
    #[error("temperature {value} outside range [{min}, {max}]")]
    InvalidTemperature {
        /// The rejected temperature argument
        value: f64,
        /// Lower bound of accepted water temperatures
        min: f64,
        /// Upper bound of accepted water temperatures
        max: f64,
    },

    /// Requested pipe volume is non-positive or exceeds pool capacity
    #[error("volume {requested} not in (0, {capacity}]")]
    InvalidVolume {
        /// The rejected volume argument
        requested: f64,
        /// Total pool capacity (`height * width * length`)
        capacity: f64,
    },

    /// Time argument to a sensor read must be strictly positive
    #[error("time {value} is not positive")]
    InvalidTime {
        /// The rejected time argument
        value: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for PoolError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidTemperature { value, min, max } =>
                defmt::write!(fmt, "temperature {} outside [{}, {}]", value, min, max),
            Self::InvalidVolume { requested, capacity } =>
                defmt::write!(fmt, "volume {} not in (0, {}]", requested, capacity),
            Self::InvalidTime { value } =>
                defmt::write!(fmt, "time {} is not positive", value),
        }
    }
}
