mod cli;

use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use oscsim::prelude::*;
use oscsim::export;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn print_presets() {
    println!("{:<18} {:<9} {}", "Preset", "Type", "Description");
    println!("{:-<18} {:-<9} {:-<40}", "", "", "");
    for preset in PRESETS {
        println!(
            "{:<18} {:<9} {}",
            preset.name,
            preset.variant().as_str(),
            preset.description
        );
    }
}

fn print_series(series: &Series) {
    let unit = series.variant().displacement_unit();
    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>12}",
        "Time [s]",
        format!("x [{unit}]"),
        format!("v [{unit}/s]"),
        "E [J]",
        "Phase"
    );
    println!("{:-<10} {:-<12} {:-<12} {:-<12} {:-<12}", "", "", "", "", "");

    let stride = (series.len() / 20).max(1);
    for s in series.iter().step_by(stride) {
        println!(
            "{:>10.4} {:>12.6} {:>12.6} {:>12.6} {:>12.4}",
            s.time, s.displacement, s.velocity, s.total_energy, s.phase
        );
    }
}

/// Drive a session from the system clock, one frame every `FRAME_MS`
fn run_live(params: Parameters, config: EngineConfig, seconds: f64) -> Result<()> {
    let clock = SystemClock::new();
    let mut session =
        SimulationSession::with_config(params, ImmediateScheduler::new(), clock, config)?;

    let budget_ms = seconds.max(0.0) * 1000.0;
    let frame = Duration::from_secs_f64(FRAME_MS / 1000.0);
    let mut frames = 0usize;

    session.start();
    let started = clock.now_ms();
    while clock.now_ms() - started < budget_ms {
        session.tick();
        frames += 1;
        thread::sleep(frame);
    }
    session.tick();
    session.stop();

    let buffer = session.samples();
    info!(
        frames,
        retained = buffer.len(),
        time = session.time(),
        "live run finished"
    );

    println!();
    println!("Live session: {:.3} s simulated, {} samples retained", session.time(), buffer.len());
    for s in buffer.iter().rev().take(5).rev() {
        println!(
            "  t={:>8.4}  x={:>10.6}  v={:>10.6}  E={:>10.6}",
            s.time, s.displacement, s.velocity, s.total_energy
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let preset = find_preset(&args.preset).ok_or_else(|| SimError::UnknownPreset(args.preset.clone()))?;
    let mut params = preset.parameters;
    if let Some(damping) = args.damping {
        params.set_damping(damping);
    }
    if let Some(speed) = args.speed {
        params.set_simulation_speed(speed);
    }

    let config = match &args.config {
        Some(path) => EngineConfig::load_or_default(path),
        None => EngineConfig::default(),
    };

    let solver = Solver::new(params)?;
    let derived = solver.derived();
    println!("{} ({})", preset.name, params.variant());
    println!("  ω = {:.6} rad/s", derived.angular_frequency);
    println!("  T = {:.6} s", derived.period);
    println!("  f = {:.6} Hz", derived.frequency);
    println!();

    let mut options = config.chart_options();
    if let Some(samples) = args.samples {
        options.samples = samples;
    }
    if let Some(periods) = args.periods {
        options.periods = periods;
    }

    let series = oscsim::trajectory::generate(&solver, options)?;
    print_series(&series);

    if let Some(path) = &args.csv {
        let written = export::save_csv(path, &series)?;
        println!();
        println!("Series written to {}", written.display());
    }

    if let Some(seconds) = args.live {
        run_live(params, config, seconds)?;
    }

    Ok(())
}
