use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

use tape_targets::table::{TableRoute, TableSink, TableSnapshot};
use tape_targets::{load_frames, FrameOutcome, FrameReport, TargetPipeline, VisionConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tape-targets",
    version,
    about = "Replay recorded polygon candidates through target selection and table publishing"
)]
struct Cli {
    /// JSON array of frames: `[{"width": .., "height": .., "candidates": [..]}]`.
    #[arg(long)]
    frames: PathBuf,
    /// Vision config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Publish to the shared camera table regardless of the config flag.
    #[arg(long)]
    camera_table: bool,
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
    /// Emit structured JSON logs (requires the `tracing` feature).
    #[arg(long)]
    json_log: bool,
}

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum FrameLine<'a> {
    Disabled { frame: usize },
    BinaryPreview { frame: usize },
    Processed { frame: usize, report: &'a FrameReport },
}

#[derive(Serialize)]
struct TableDump<'a> {
    table: &'a str,
    entries: TableSnapshot,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    run(cli)
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.json_log {
        eprintln!("--json-log needs the `tracing` feature; using plain logs");
    }
    tape_targets::core::init_with_level(cli.log_level)?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    tape_targets::core::init_tracing(cli.json_log);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => VisionConfig::load_json(path)?,
        None => VisionConfig::default(),
    };
    if cli.camera_table {
        config.flags.use_camera_table = true;
    }
    config.validate()?;

    let frames = load_frames(&cli.frames)?;
    log::info!("replaying {} frames from {}", frames.len(), cli.frames.display());

    let route = TableRoute::in_memory();
    let mut pipeline = TargetPipeline::new(route.clone());

    for (index, frame) in frames.iter().enumerate() {
        let outcome = pipeline.process_frame(frame, &config)?;
        let line = match &outcome {
            FrameOutcome::Disabled => FrameLine::Disabled { frame: index },
            FrameOutcome::BinaryPreview => FrameLine::BinaryPreview { frame: index },
            FrameOutcome::Processed(report) => FrameLine::Processed {
                frame: index,
                report,
            },
        };
        println!("{}", serde_json::to_string(&line)?);
    }

    let sink = route.select(config.flags.use_camera_table);
    let dump = TableDump {
        table: sink.name(),
        entries: sink.snapshot(),
    };
    println!("{}", serde_json::to_string(&dump)?);
    Ok(())
}
