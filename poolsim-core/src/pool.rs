//! Pool State and Sensor Read Paths
//!
//! ## Overview
//!
//! [`Pool`] is the single long-lived object of the simulation: it owns the
//! geometry, the bulk water temperature, the ambient temperature it relaxes
//! toward, the mixing rate, and an internal clock counting time since the
//! last disturbance. Two mutators disturb the water ([`Pool::reset_pool`],
//! [`Pool::open_pipe`]) and two queries emulate the physical sensors
//! ([`Pool::read_in_sensor`], [`Pool::read_out_sensor`]).
//!
//! ## Clock discipline
//!
//! The clock starts at 1 and is advanced by exactly one operation: the inlet
//! read. Outlet reads never touch it, `open_pipe` moves it only through the
//! inlet read it performs internally, and `reset_pool` restarts it at 1.
//!
//! ## Concurrency
//!
//! All methods take `&mut self`; the inlet read and `open_pipe` both
//! read-then-write state, so a shared instance needs exclusive-access
//! serialization (one lock per pool, or single-writer discipline). There is
//! no interior mutability.

use log::{debug, trace};

use crate::constants::{
    INITIAL_ELAPSED_TIME, WATER_TEMP_MAX_C, WATER_TEMP_MIN_C,
};
use crate::errors::{PoolError, PoolResult};
use crate::noise::NoiseInjector;
use crate::thermal::{mixing_phase, relax_toward_ambient, MixingPhase};

/// Immutable construction parameters for a [`Pool`]
///
/// All dimensions and the mixing rate are positive reals in one consistent
/// unit system. Temperatures are unconstrained here - the [1, 100] °C band
/// is enforced on the mutators, not at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Pool depth
    pub height: f64,
    /// Pool width
    pub width: f64,
    /// Pool length, the distance new water travels to reach the outlet
    pub length: f64,
    /// Initial bulk water temperature (°C)
    pub water_temperature: f64,
    /// Environment temperature the water relaxes toward (°C)
    pub ambient_temperature: f64,
    /// Volumetric mixing rate (volume per time unit)
    pub mixing_speed: f64,
}

impl Default for PoolConfig {
    /// Reference pool used across docs and tests: 2×2×2 (volume 8), 30 °C
    /// water in a 20 °C environment, mixing rate 2 (time-to-full-mix 4).
    fn default() -> Self {
        Self {
            height: 2.0,
            width: 2.0,
            length: 2.0,
            water_temperature: 30.0,
            ambient_temperature: 20.0,
            mixing_speed: 2.0,
        }
    }
}

/// Simulated pool with inlet and outlet temperature sensors
#[derive(Debug, Clone)]
pub struct Pool {
    height: f64,
    width: f64,
    length: f64,
    water_temperature: f64,
    ambient_temperature: f64,
    mixing_speed: f64,
    /// Water temperature snapshot from the moment of the last pipe-open
    previous_temperature: f64,
    /// Time since the last disturbance; advanced only by the inlet read
    elapsed_time: f64,
    noise: NoiseInjector,
}

impl Pool {
    /// Pool with a noise source seeded from OS entropy
    #[cfg(feature = "std")]
    pub fn new(config: PoolConfig) -> Self {
        Self::build(config, NoiseInjector::new())
    }

    /// Pool with an explicitly seeded noise source, for reproducible runs
    pub fn with_seed(config: PoolConfig, seed: u64) -> Self {
        Self::build(config, NoiseInjector::with_seed(seed))
    }

    fn build(config: PoolConfig, noise: NoiseInjector) -> Self {
        Self {
            height: config.height,
            width: config.width,
            length: config.length,
            water_temperature: config.water_temperature,
            ambient_temperature: config.ambient_temperature,
            mixing_speed: config.mixing_speed,
            previous_temperature: config.water_temperature,
            elapsed_time: INITIAL_ELAPSED_TIME,
            noise,
        }
    }

    /// Total water capacity, `height * width * length`
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.length
    }

    /// Duration after a disturbance before the pool counts as mixed
    pub fn time_to_full_mix(&self) -> f64 {
        self.volume() / self.mixing_speed
    }

    /// Current bulk water temperature (ground truth, noise-free)
    pub fn water_temperature(&self) -> f64 {
        self.water_temperature
    }

    /// Environment temperature the water relaxes toward
    pub fn ambient_temperature(&self) -> f64 {
        self.ambient_temperature
    }

    /// Water temperature snapshot taken at the last pipe-open
    pub fn previous_temperature(&self) -> f64 {
        self.previous_temperature
    }

    /// Time accumulated since the last disturbance
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Replace all water instantaneously.
    ///
    /// Sets the bulk temperature and restarts the clock at 1. The
    /// pipe-open snapshot is deliberately left untouched: until new water
    /// reaches it, the outlet keeps reporting what it saw before the swap.
    pub fn reset_pool(&mut self, new_temperature: f64) -> PoolResult<()> {
        check_water_temperature(new_temperature)?;
        debug!(
            "pool reset: {} -> {} C",
            self.water_temperature, new_temperature
        );
        self.water_temperature = new_temperature;
        self.elapsed_time = INITIAL_ELAPSED_TIME;
        Ok(())
    }

    /// Add a volume of water at the given temperature, blending with the
    /// existing contents.
    ///
    /// The blend is volume-weighted between the injected water and the
    /// *noisy inlet estimate* of the remaining, undisplaced volume - not the
    /// stored ground truth - so every refill propagates sensor noise into
    /// the state. Taking that estimate advances the clock by its own
    /// current value, as any inlet read does; the clock is not reset.
    pub fn open_pipe(&mut self, volume: f64, inlet_temperature: f64) -> PoolResult<()> {
        let capacity = self.volume();
        if volume <= 0.0 || volume > capacity {
            return Err(PoolError::InvalidVolume {
                requested: volume,
                capacity,
            });
        }
        check_water_temperature(inlet_temperature)?;

        self.previous_temperature = self.water_temperature;
        let sensed = self.read_in_sensor(self.elapsed_time)?;
        self.water_temperature =
            (inlet_temperature * volume + sensed * (capacity - volume)) / capacity;
        debug!(
            "pipe open: {} units at {} C, bulk now {} C",
            volume, inlet_temperature, self.water_temperature
        );
        Ok(())
    }

    /// Noisy reading from the inlet sensor after `time` units.
    ///
    /// The sole advancer of the internal clock: `elapsed_time` grows by
    /// `time` before the phase check, while the phase check itself compares
    /// the query time (not the accumulated clock) against time-to-full-mix.
    pub fn read_in_sensor(&mut self, time: f64) -> PoolResult<f64> {
        check_time(time)?;
        let threshold = self.time_to_full_mix();
        self.elapsed_time += time;

        let phase = mixing_phase(time, threshold);
        let ideal = match phase {
            MixingPhase::Transient => self.water_temperature,
            MixingPhase::Steady => relax_toward_ambient(
                self.water_temperature,
                self.ambient_temperature,
                time,
            ),
        };
        trace!("inlet read at t={}: {:?}, ideal {}", time, phase, ideal);
        Ok(self.perturb(ideal, phase))
    }

    /// Noisy reading from the outlet sensor after `time` units.
    ///
    /// Never advances the clock. In the transient phase the outlet lags the
    /// inlet: new water reaches it only once `time >= length / mixing_speed`;
    /// before that it still reports the pre-disturbance snapshot. The
    /// steady-phase curve is identical to the inlet's.
    pub fn read_out_sensor(&mut self, time: f64) -> PoolResult<f64> {
        check_time(time)?;

        let phase = mixing_phase(time, self.time_to_full_mix());
        let ideal = match phase {
            MixingPhase::Transient => {
                if time >= self.length / self.mixing_speed {
                    self.water_temperature
                } else {
                    self.previous_temperature
                }
            }
            MixingPhase::Steady => relax_toward_ambient(
                self.water_temperature,
                self.ambient_temperature,
                time,
            ),
        };
        trace!("outlet read at t={}: {:?}, ideal {}", time, phase, ideal);
        Ok(self.perturb(ideal, phase))
    }

    /// Route an ideal value through the injector, tying the noise spread to
    /// the last disturbance while the pool is still recirculating.
    fn perturb(&mut self, ideal: f64, phase: MixingPhase) -> f64 {
        let swing = self.water_temperature - self.previous_temperature;
        let recent_swing =
            (phase == MixingPhase::Transient && swing != 0.0).then_some(swing);
        self.noise.perturb(ideal, recent_swing)
    }
}

fn check_water_temperature(value: f64) -> PoolResult<()> {
    if value > WATER_TEMP_MAX_C || value < WATER_TEMP_MIN_C {
        return Err(PoolError::InvalidTemperature {
            value,
            min: WATER_TEMP_MIN_C,
            max: WATER_TEMP_MAX_C,
        });
    }
    Ok(())
}

fn check_time(value: f64) -> PoolResult<()> {
    if value <= 0.0 {
        return Err(PoolError::InvalidTime { value });
    }
    Ok(())
}
