//! Pool temperature simulation with noisy sensor emulation
//!
//! Simulates a rectangular pool's water temperature over time and emulates
//! two physical sensors (inlet, outlet) reporting noisy, time-dependent
//! readings. Stands in for real hardware while testing monitoring and
//! control software: the data is synthetic but plausible, including rare
//! glitch readings that mimic sensor faults.
//!
//! Key properties:
//! - Single well-mixed reservoir, one scalar temperature, no CFD
//! - Deterministic under a fixed seed - no global RNG state
//! - `no_std`-capable (math via `libm`), `std` on by default
//!
//! ```
//! use poolsim_core::{Pool, PoolConfig};
//!
//! let mut pool = Pool::with_seed(PoolConfig::default(), 42);
//!
//! // Transient phase: the inlet reports the bulk temperature plus noise
//! let early = pool.read_in_sensor(3.0)?;
//! assert!(early.is_finite());
//!
//! // Refills must fit the pool
//! assert!(pool.open_pipe(9.0, 50.0).is_err());
//! # Ok::<(), poolsim_core::PoolError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod noise;
pub mod pool;
pub mod thermal;

// Public API
pub use errors::{PoolError, PoolResult};
pub use noise::NoiseInjector;
pub use pool::{Pool, PoolConfig};
pub use thermal::MixingPhase;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
