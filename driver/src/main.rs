use anyhow::Context;
use bridge::bridge::{default_bind_address, StatusBridge};
use clap::Parser;
use generator::profile::{write_survey, SurveyProfile};
use soundcore::RunResult;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::JobConfig;
use workflow::runner::Runner;

mod bridge;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Aligns coordinate and depth survey files")]
struct Args {
    /// Load the job from YAML instead of the flags below
    #[arg(long)]
    job: Option<PathBuf>,
    /// Coordinates file (`hh:mm:ss   x   y`)
    #[arg(long)]
    coordinates: Option<PathBuf>,
    /// Depths file (`id   H M S   height`)
    #[arg(long)]
    depths: Option<PathBuf>,
    /// Clock delta of the positioning receiver, `hh:mm:ss`
    #[arg(long)]
    clock_delta: Option<String>,
    /// Antenna height added to every sounding
    #[arg(long)]
    antenna_delta: Option<String>,
    /// Reference elevation of the instrument
    #[arg(long)]
    instrument_base: Option<String>,
    /// Output file name
    #[arg(long, default_value = "")]
    output: String,
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Write a synthetic coordinates/depths pair into this directory
    #[arg(long)]
    generate: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Append a one-line run summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Keep the status bridge alive for incoming jobs
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long)]
    bind: Option<SocketAddr>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(dir) = &args.generate {
        let profile = SurveyProfile {
            seed: args.seed,
            ..Default::default()
        };
        let survey = write_survey(dir, &profile)?;
        println!(
            "Generated {} and {} (clock delta {})",
            survey.coordinates.display(),
            survey.depths.display(),
            survey.clock_delta
        );
    }

    let job = if let Some(path) = &args.job {
        JobConfig::load(path)?
    } else {
        JobConfig {
            coordinates: args.coordinates.clone(),
            depths: args.depths.clone(),
            clock_delta: args.clock_delta.clone(),
            antenna_delta: args.antenna_delta.clone(),
            instrument_base: args.instrument_base.clone(),
            output: args.output.clone(),
            output_dir: args.output_dir.clone(),
        }
    };

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating runtime")?;
    let bridge = args
        .serve
        .then(|| StatusBridge::new(args.bind.unwrap_or_else(default_bind_address)));

    if job.has_inputs() {
        let runner = Runner::new(job);
        let result = runtime.block_on(runner.execute())?;
        print_summary(&result);

        if let Some(path) = &args.report {
            append_report(path, &result)?;
        }
        if let Some(bridge) = &bridge {
            bridge.publish(&result);
        }
    }

    if let Some(bridge) = &bridge {
        bridge.publish_status("Status bridge running (Ctrl+C to stop)...");
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

fn print_summary(result: &RunResult) {
    if let Some(message) = result.success_message() {
        println!("{}", message);
    }
    if let Some(message) = result.warning_message() {
        println!("Warning: {}", message);
    }
    if let Some(message) = result.error_message() {
        eprintln!("Errors:\n{}", message);
    }
    if let Some(path) = &result.saved_to {
        println!("{} records written to {}", result.records.len(), path.display());
    }
}

fn append_report(path: &Path, result: &RunResult) -> anyhow::Result<()> {
    let line = format!(
        "outcome={:?} coverage={:?} records={} issues={}\n",
        result.outcome,
        result.coverage,
        result.records.len(),
        result.issues.len()
    );
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    file.write_all(line.as_bytes())?;
    Ok(())
}
