//! Live pendulum session demo
//!
//! Drives a damped pendulum with a hand-stepped clock at three different
//! frame rates and shows that simulation time and state agree, then compares
//! the live buffer against the closed-form solution.
//!
//! System: θ(t) = θ0·e^(−γt)·cos(ωt), ω = √(g/L)

use oscsim::prelude::*;

fn run(params: Parameters, fps: f64, seconds: f64) -> SimulationSession<ImmediateScheduler, ManualClock> {
    let clock = ManualClock::new(0.0);
    let mut session = SimulationSession::new(params, ImmediateScheduler::new(), clock.clone())
        .expect("preset parameters are valid");

    let frame_ms = 1000.0 / fps;
    let frames = (seconds * fps).round() as usize;

    session.start();
    session.tick();
    for _ in 0..frames {
        clock.advance(frame_ms);
        session.tick();
    }
    session
}

fn main() {
    println!("Damped Pendulum - Frame Rate Independence Demo");
    println!("==============================================");
    println!();

    let params = find_preset("Damped Pendulum").unwrap().parameters;
    let d = DerivedQuantities::from_parameters(&params).unwrap();
    println!("ω = {:.4} rad/s, T = {:.4} s, f = {:.4} Hz", d.angular_frequency, d.period, d.frequency);
    println!();

    println!(
        "{:>6} {:>10} {:>12} {:>12} {:>10}",
        "FPS", "Time", "Angle", "Exact", "Samples"
    );
    println!("{:-<6} {:-<10} {:-<12} {:-<12} {:-<10}", "", "", "", "", "");

    let solver = Solver::new(params).unwrap();
    for fps in [24.0, 60.0, 144.0] {
        let session = run(params, fps, 5.0);
        let last = session.samples().last().copied().unwrap_or_default();
        let exact = solver.sample(session.time());
        println!(
            "{:>6} {:>10.4} {:>12.6} {:>12.6} {:>10}",
            fps,
            session.time(),
            last.displacement,
            exact.displacement,
            session.samples().len()
        );
    }

    println!();
    println!("Energy over one period:");
    let series = solver.samples((0..=8).map(|i| i as f64 * d.period / 8.0));
    for s in series {
        println!(
            "  t={:>6.3}  PE={:>8.5}  KE={:>8.5}  E={:>8.5}",
            s.time, s.potential_energy, s.kinetic_energy, s.total_energy
        );
    }
}
