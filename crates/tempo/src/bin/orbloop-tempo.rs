use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use orbloop_domain::{EstimatorConfig, ExportFormat, ReportExporter, SerdeExporter};
use orbloop_tempo::{TempoJob, TempoPipeline};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Yaml => ExportFormat::Yaml,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate tempo and beats per bar of recorded takes", long_about = None)]
struct Cli {
    /// Audio files to analyze
    #[arg(required = true)]
    inputs: Vec<String>,
    /// YAML or JSON estimator config
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Samples per analysis window
    #[arg(long)]
    window_size: Option<usize>,
    /// Minimum mean-squared energy considered audible
    #[arg(long)]
    silence_threshold: Option<f32>,
    /// Energy jump factor required for an onset
    #[arg(long)]
    energy_ratio: Option<f32>,
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,
}

impl Cli {
    fn estimator_config(&self) -> anyhow::Result<EstimatorConfig> {
        let mut config = match &self.config {
            Some(path) => EstimatorConfig::load(path)?,
            None => EstimatorConfig::default(),
        };
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(threshold) = self.silence_threshold {
            config.silence_threshold = threshold;
        }
        if let Some(ratio) = self.energy_ratio {
            config.energy_increase_ratio = ratio;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = TempoPipeline::new(cli.estimator_config()?)?;
    let reports = cli
        .inputs
        .iter()
        .map(|path| {
            pipeline.analyze(&TempoJob {
                audio_path: path.clone(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let bytes = SerdeExporter.export(&reports, cli.format.into())?;
    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
