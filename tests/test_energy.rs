//! Energy behaviour of the closed-form solutions
//!
//! - Undamped spring: total energy constant at every instant
//! - Damped spring and pendulum: total energy decreasing across half periods.
//!   Between those points the damped solution keeps the undamped ω and the
//!   pendulum pairs exact `1 − cos θ` potential energy with small-angle
//!   motion, so energy can rise slightly within a half period.
//! - Energy bookkeeping: total is always potential + kinetic

use approx::assert_relative_eq;
use oscsim::prelude::*;

fn times() -> impl Iterator<Item = f64> {
    (0..500).map(|i| i as f64 * 0.0371 - 3.0)
}

#[test]
fn test_undamped_spring_conserves_energy() {
    let cases = [
        Parameters::spring(2.0, 50.0, 1.5),
        Parameters::spring(2.0, 20.0, 1.5),
        Parameters::spring(0.3, 1000.0, 0.02),
        Parameters::spring(10.0, 0.5, 4.0),
    ];

    for params in cases {
        let solver = Solver::new(params).unwrap();
        let reference = solver.sample(0.0).total_energy;

        for t in times() {
            let e = solver.sample(t).total_energy;
            assert!(
                (e - reference).abs() < 1e-9,
                "energy drifted to {} from {} at t={} for {:?}",
                e,
                reference,
                t,
                params
            );
        }
    }
}

#[test]
fn test_undamped_spring_energy_value() {
    // E = ½ k A²
    let solver = Solver::new(Parameters::spring(2.0, 50.0, 1.5)).unwrap();
    assert_relative_eq!(solver.sample(0.77).total_energy, 0.5 * 50.0 * 2.25, epsilon = 1e-9);
}

#[test]
fn test_damped_energy_decreases_over_half_periods() {
    for name in ["Damped Spring", "Damped Pendulum"] {
        let params = find_preset(name).unwrap().parameters;
        let solver = Solver::new(params).unwrap();
        let half = solver.derived().period / 2.0;

        let energies: Vec<f64> = (0..40)
            .map(|n| solver.sample(n as f64 * half).total_energy)
            .collect();

        for pair in energies.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "{}: energy rose from {} to {}",
                name,
                pair[0],
                pair[1]
            );
        }
        assert!(energies[39] < energies[0]);
    }
}

#[test]
fn test_damped_energy_envelope() {
    // At multiples of the period the spring energy is ½ m A² e^(−2γt) (ω² + γ²)
    let params = Parameters::spring(1.0, 25.0, 1.0).with_damping(0.3);
    let solver = Solver::new(params).unwrap();
    let d = *solver.derived();
    let gamma = 0.3;

    for n in 0..6 {
        let t = n as f64 * d.period;
        let expected = 0.5
            * (-2.0 * gamma * t).exp()
            * (d.angular_frequency * d.angular_frequency + gamma * gamma);
        assert_relative_eq!(solver.sample(t).total_energy, expected, epsilon = 1e-9);
    }
}

#[test]
fn test_pendulum_energy_components() {
    let params = Parameters::pendulum(2.0, 2.0, 0.5);
    let solver = Solver::new(params).unwrap();

    for t in times() {
        let s = solver.sample(t);
        assert!(s.potential_energy >= 0.0);
        assert!(s.kinetic_energy >= 0.0);
        assert_eq!(s.total_energy, s.potential_energy + s.kinetic_energy);
        assert_relative_eq!(
            s.potential_energy,
            2.0 * 9.81 * 2.0 * (1.0 - s.displacement.cos()),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            s.kinetic_energy,
            0.5 * 2.0 * (2.0 * s.velocity).powi(2),
            epsilon = 1e-12
        );
    }
}
