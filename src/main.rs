use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod engine;
mod engines;
mod error;
mod extract;
mod preprocessing;
mod text;

use engine::OcrConfig;
use extract::ZoneLabel;
use preprocessing::Pipeline;

/// How labels are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One label per line
    Text,
    /// JSON array of strings
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "chart-zones")]
#[command(about = "Extract support/resistance zone labels from a chart screenshot")]
#[command(version)]
pub struct Args {
    /// Chart screenshot to read
    pub image: PathBuf,

    /// OCR engine to use (e.g., "tesseract"); defaults to the first compiled in
    #[arg(long, env = "CHART_ZONES_ENGINE")]
    pub engine: Option<String>,

    /// Recognition language (e.g., "eng")
    #[arg(long, env = "CHART_ZONES_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (downloaded to the cache dir if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only labels
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::info!("chart-zones v{}", env!("CARGO_PKG_VERSION"));

    let labels = run(&config).map_err(|e| {
        tracing::error!(code = e.code(), "{}", e);
        e
    })?;

    print_labels(&labels, config.format)
}

fn run(config: &config::Config) -> Result<Vec<ZoneLabel>, error::ZoneError> {
    let ocr = OcrConfig::default();
    let labels = extract::extract_zones(&config.image, &Pipeline::default(), &ocr, || {
        let registry = engines::EngineRegistry::new();
        tracing::debug!("Compiled engines: {:?}", registry.list());
        let engine = registry.create(config)?;
        tracing::debug!("Using {}: {}", engine.name(), engine.description());
        Ok(engine)
    })?;

    tracing::info!("Extracted {} zone labels", labels.len());
    Ok(labels)
}

fn print_labels(labels: &[ZoneLabel], format: OutputFormat) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            for label in labels {
                writeln!(out, "{}", label)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, labels)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
