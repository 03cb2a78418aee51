//! End-to-End Sensor Scenarios
//!
//! Exercises the public surface the way monitoring software would: construct
//! a pool, disturb it, and watch both sensors across the transient and
//! steady phases. Noisy assertions use a median over a handful of reads so
//! a rare glitch reading cannot flip a test.

use poolsim_core::{Pool, PoolConfig, PoolError};

/// Reference pool: 2×2×2 (volume 8), 30 °C water, 20 °C ambient, mixing
/// rate 2, so time-to-full-mix is 4 and the outlet lag threshold is 1.
fn reference_pool(seed: u64) -> Pool {
    Pool::with_seed(PoolConfig::default(), seed)
}

/// Median of repeated reads; robust against the 1-in-999 glitch path.
fn median_of<F: FnMut() -> f64>(n: usize, mut read: F) -> f64 {
    let mut samples: Vec<f64> = (0..n).map(|_| read()).collect();
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    samples[n / 2]
}

#[test]
fn derived_quantities_match_geometry() {
    let pool = reference_pool(1);
    assert_eq!(pool.volume(), 8.0);
    assert_eq!(pool.time_to_full_mix(), 4.0);
    assert_eq!(pool.elapsed_time(), 1.0);
    assert_eq!(pool.water_temperature(), 30.0);
    assert_eq!(pool.previous_temperature(), 30.0);
}

#[test]
fn transient_then_steady_inlet_readings() {
    let mut pool = reference_pool(2);

    // t = 3 is inside the transient window: centered on the bulk 30 C
    let early = median_of(9, || pool.read_in_sensor(3.0).unwrap());
    assert!((early - 30.0).abs() < 4.0, "transient median {early}");

    // t = 120 is steady phase, past the log reference: the curve has
    // dropped below the bulk temperature, trending toward ambient
    let late = median_of(9, || pool.read_in_sensor(120.0).unwrap());
    assert!(late < 30.0 && late > 20.0, "steady median {late}");
    assert!((late - 26.99).abs() < 4.0, "steady median {late}");
}

#[test]
fn outlet_lags_behind_a_reset() {
    let mut pool = reference_pool(3);
    pool.reset_pool(80.0).unwrap();

    // Before length / mixing_speed = 1 the outlet still sees the old fill
    // (the reset left the snapshot at the original 30 C). The recent swing
    // of 50 degrees widens the noise to ln 50, about 3.9.
    let lagging = median_of(9, || pool.read_out_sensor(0.5).unwrap());
    assert!((lagging - 30.0).abs() < 13.0, "lagging median {lagging}");

    // From the lag threshold onward the new fill has reached the outlet
    let arrived = median_of(9, || pool.read_out_sensor(2.0).unwrap());
    assert!((arrived - 80.0).abs() < 13.0, "arrived median {arrived}");
}

#[test]
fn outlet_reads_leave_the_inlet_unaffected() {
    let mut a = reference_pool(4);
    let mut b = reference_pool(4);

    // Outlet reads on `a` only; they must not advance the clock, so both
    // pools stay in lockstep state-wise
    for _ in 0..10 {
        a.read_out_sensor(2.0).unwrap();
    }
    assert_eq!(a.elapsed_time(), b.elapsed_time());
    assert_eq!(a.water_temperature(), b.water_temperature());
    assert_eq!(a.previous_temperature(), b.previous_temperature());
}

#[test]
fn identical_seeds_replay_identical_sessions() {
    let mut a = reference_pool(99);
    let mut b = reference_pool(99);

    assert_eq!(a.read_in_sensor(3.0).unwrap(), b.read_in_sensor(3.0).unwrap());
    assert_eq!(a.read_out_sensor(2.0).unwrap(), b.read_out_sensor(2.0).unwrap());
    a.open_pipe(4.0, 50.0).unwrap();
    b.open_pipe(4.0, 50.0).unwrap();
    assert_eq!(a.water_temperature(), b.water_temperature());
    assert_eq!(a.elapsed_time(), b.elapsed_time());
    assert_eq!(
        a.read_in_sensor(10.0).unwrap(),
        b.read_in_sensor(10.0).unwrap()
    );
}

#[test]
fn overfull_pipe_is_rejected_with_capacity() {
    let mut pool = reference_pool(5);
    assert_eq!(
        pool.open_pipe(9.0, 50.0),
        Err(PoolError::InvalidVolume {
            requested: 9.0,
            capacity: 8.0
        })
    );
    // Rejection is total: no snapshot, no clock movement
    assert_eq!(pool.elapsed_time(), 1.0);
    assert_eq!(pool.previous_temperature(), 30.0);
}

#[test]
fn boundary_times_fail_fast() {
    let mut pool = reference_pool(6);
    assert!(matches!(
        pool.read_in_sensor(0.0),
        Err(PoolError::InvalidTime { .. })
    ));
    assert!(matches!(
        pool.read_out_sensor(-1.0),
        Err(PoolError::InvalidTime { .. })
    ));
}

#[test]
fn reset_recenters_the_transient_inlet() {
    let mut pool = reference_pool(7);
    pool.reset_pool(50.0).unwrap();
    assert_eq!(pool.elapsed_time(), 1.0);

    // Snapshot still holds 30 C, so the swing of 20 widens the noise to
    // ln 20, about 3.0; readings center on the new 50 C fill
    let reading = median_of(9, || pool.read_in_sensor(3.0).unwrap());
    assert!((reading - 50.0).abs() < 10.0, "post-reset median {reading}");
}

#[test]
fn refill_blends_between_old_and_injected_water() {
    let mut pool = reference_pool(8);
    pool.open_pipe(4.0, 50.0).unwrap();

    // Half the volume stayed near 30 C (as the inlet saw it), half came in
    // at 50 C; even a glitched inlet estimate keeps the blend in (25, 75)
    let blended = pool.water_temperature();
    assert!(blended > 25.0 && blended < 75.5, "blend was {blended}");
    assert_eq!(pool.previous_temperature(), 30.0);
}
