use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use muncher::PlaygroundConfig;

#[derive(Parser)]
#[command(name = "muncher", about = "An @ wanders a box in your terminal, eating stars")]
struct Args {
    /// Seed for a reproducible run (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,

    /// Seconds between star spawns
    #[arg(long, default_value_t = 5)]
    spawn_secs: u64,

    /// Write debug logs to this file (the terminal is busy drawing)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build();
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, File::create(path)?);
    }

    let mut config = PlaygroundConfig::default()
        .with_frame_delay(Duration::from_millis(args.frame_ms))
        .with_spawn_interval(Duration::from_secs(args.spawn_secs));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let interrupt = muncher::run(&config)?;
    std::process::exit(interrupt.exit_code());
}
