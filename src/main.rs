//! Demo driver: one intersection, a few signals, simulated time in fixed steps,
//! then a simulated outage and recovery.
//!
//! Run with: cargo run --bin signalgrid-demo -- --steps 10 --step-seconds 5

use clap::Parser;
use signalgrid::{SystemStatus, TrafficError, TrafficSystem};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flag.
const LOG_ENV: &str = "SIGNALGRID_LOG";

#[derive(Debug, Parser)]
#[command(name = "signalgrid-demo", about = "Simulate timed traffic signals")]
struct Args {
    /// Red duration of each demo signal, in seconds
    #[arg(long, default_value_t = 20)]
    red: u32,

    /// Yellow duration of each demo signal, in seconds
    #[arg(long, default_value_t = 5)]
    yellow: u32,

    /// Green duration of each demo signal, in seconds
    #[arg(long, default_value_t = 25)]
    green: u32,

    /// Number of signals added to the demo intersection
    #[arg(long, default_value_t = 2)]
    signals: usize,

    /// Number of update steps to simulate
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Simulated seconds per update step
    #[arg(long, default_value_t = 5)]
    step_seconds: u64,

    /// Print status reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Maps a verbosity count to a tracing directive.
const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_status(
    title: &str,
    status: &SystemStatus,
    json: bool,
) -> Result<(), serde_json::Error> {
    println!("\n{title}");
    if json {
        println!("{}", serde_json::to_string(status)?);
    } else {
        println!("{status}");
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Traffic(#[from] TrafficError),

    #[error("Failed to render status: {0}")]
    Render(#[from] serde_json::Error),
}

fn run(args: &Args) -> Result<(), DemoError> {
    let mut system = TrafficSystem::new();
    let crossing = system.create_intersection();

    for _ in 0..args.signals {
        system.add_signal(crossing, args.red, args.yellow, args.green)?;
    }

    print_status("Initial state:", &system.system_status(), args.json)?;

    for step in 1..=args.steps {
        system.update_system(args.step_seconds);
        print_status(
            &format!("Time step {step}:"),
            &system.system_status(),
            args.json,
        )?;
    }

    system.set_intersection_status(crossing, false)?;
    print_status(
        "Simulating intersection failure...",
        &system.system_status(),
        args.json,
    )?;

    system.set_intersection_status(crossing, true)?;
    system.synchronize_intersection(crossing)?;
    print_status(
        "Restoring intersection...",
        &system.system_status(),
        args.json,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
