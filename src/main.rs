//! SRT Assembler
//!
//! Command-line runner: reads a JSON job describing the chunks of one
//! recording, assembles them into a single subtitle timeline and writes the
//! SRT document to a file or stdout.

use std::io::Write;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srt_assembler::{
    generate_default_config, Assembler, AssemblyJob, ConfigFile, JobFile, Result,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "srt-assembler";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("--generate-config") {
        let path = args
            .get(2)
            .map(String::as_str)
            .unwrap_or("srt-assembler.toml");
        generate_default_config(path)?;
        eprintln!("Default configuration written to {}", path);
        return Ok(());
    }

    let Some(job_path) = args.get(1) else {
        eprintln!(
            "usage: {} <job.json> [config.toml] [output.srt]\n       {} --generate-config [path]",
            APP_NAME, APP_NAME
        );
        std::process::exit(2);
    };

    // Load configuration before logging so its level and format apply.
    let config_path = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "config.toml".to_string());
    let (config_file, config_error) = if Path::new(&config_path).exists() {
        match ConfigFile::from_file(&config_path) {
            Ok(cf) => (Some(cf), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };

    let format = config_file
        .as_ref()
        .map(|cf| cf.log_format().to_string())
        .unwrap_or_else(|| "pretty".to_string());
    let config = config_file
        .map(ConfigFile::into_assembler_config)
        .unwrap_or_default();

    // Initialize logging
    init_logging(&config.log_level, &format);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = config_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let assembler = Assembler::new(config)?;
    let job_file = JobFile::from_file(job_path)?;
    let words = job_file.word_count();
    let job = AssemblyJob::from(job_file);
    tracing::info!(
        job_id = %job.id,
        chunks = job.chunks.len(),
        words,
        "Loaded job {}",
        job_path
    );

    let report = assembler.assemble(&job);
    let srt = report.to_srt();

    match args.get(3) {
        Some(output) => {
            std::fs::write(output, &srt)?;
            tracing::info!("Wrote {} cues to {}", report.cues.len(), output);
        }
        None => std::io::stdout().write_all(srt.as_bytes())?,
    }

    tracing::info!(
        stats = %serde_json::to_string(&report.stats)?,
        "Assembly statistics"
    );

    Ok(())
}

/// Initialize logging with tracing, on stderr so stdout carries the document
fn init_logging(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("srt_assembler={}", level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
