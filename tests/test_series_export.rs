//! Batch series generation, CSV export and persistence records

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use oscsim::export::{save_csv, CSV_HEADER};
use oscsim::prelude::*;
use std::fs;

#[test]
fn test_series_generation_is_bit_identical() {
    for preset in PRESETS {
        let a = generate_series(&preset.parameters, TrajectoryOptions::chart()).unwrap();
        let b = generate_series(&preset.parameters, TrajectoryOptions::chart()).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.time.to_bits(), y.time.to_bits());
            assert_eq!(x.displacement.to_bits(), y.displacement.to_bits());
            assert_eq!(x.total_energy.to_bits(), y.total_energy.to_bits());
        }
    }
}

#[test]
fn test_series_does_not_touch_live_session() {
    let clock = ManualClock::new(0.0);
    let mut session = SimulationSession::new(
        Parameters::spring(2.0, 20.0, 1.5),
        ManualScheduler::new(),
        clock.clone(),
    )
    .unwrap();
    session.start();
    session.tick();
    clock.advance(16.0);
    session.tick();

    let before = session.samples().to_vec();
    let time = session.time();
    let series = session.trajectory().unwrap();

    assert_eq!(series.len(), 201);
    assert_eq!(session.samples().to_vec(), before);
    assert_eq!(session.time(), time);
}

#[test]
fn test_phase_space_of_damped_series_spirals_inward() {
    let params = find_preset("Damped Spring").unwrap().parameters;
    let series = generate_series(&params, TrajectoryOptions::trajectory().with_samples(400)).unwrap();
    let points = series.phase_space();

    // Compare the state radius one period apart
    let w = series.derived().angular_frequency;
    let radius = |i: usize| {
        let p = points[i];
        (p.x * p.x + (p.y / w) * (p.y / w)).sqrt()
    };
    assert!(radius(200) < radius(0));
    assert!(radius(400) < radius(200));
}

#[test]
fn test_save_series_csv() {
    let dir = tempfile::tempdir().unwrap();
    let params = Parameters::spring(2.0, 50.0, 1.5);
    let series = generate_series(&params, TrajectoryOptions::new(10, 1.0)).unwrap();

    let written = save_csv(dir.path().join("spring"), &series).unwrap();
    assert_eq!(written.extension().unwrap(), "csv");

    let contents = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert!(lines[1].starts_with("0,1.5,"));

    let last: Vec<f64> = lines[11].split(',').map(|v| v.parse().unwrap()).collect();
    assert_relative_eq!(last[0], series.derived().period, epsilon = 1e-12);
    assert_relative_eq!(last[1], 1.5, epsilon = 1e-9);
}

#[test]
fn test_save_buffer_csv_keeps_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut buffer = SampleBuffer::with_capacity(3);
    let solver = Solver::new(Parameters::pendulum(1.0, 1.0, 0.2)).unwrap();
    for i in 0..5 {
        buffer.append(solver.sample(i as f64 * 0.1));
    }

    let path = dir.path().join("live.CSV");
    let written = save_csv(&path, buffer.iter()).unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&written).unwrap().lines().count(), 4);
}

#[test]
fn test_record_round_trip_restores_session() {
    let params = find_preset("Damped Pendulum")
        .unwrap()
        .parameters
        .with_simulation_speed(1.5);
    let session =
        SimulationSession::new(params, ManualScheduler::new(), ManualClock::default()).unwrap();

    let created = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
    let record = session.to_record("abc123", "Slow swing", created);
    let json = serde_json::to_string_pretty(&record).unwrap();

    let restored: SimulationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);

    let again =
        SimulationSession::new(restored.parameters, ManualScheduler::new(), ManualClock::default())
            .unwrap();
    assert_eq!(again.parameters(), session.parameters());
    assert_eq!(again.derived(), session.derived());
}
