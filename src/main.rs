//! Phishing detector entrypoint: serves the HTTP API, or runs a single check
//! from the command line. Models load before anything else; a missing or
//! corrupt artifact stops the process.

use anyhow::Context;
use clap::{Parser, Subcommand};
use phishing_detector::{
    api,
    config::ServiceConfig,
    features::extract_url_features,
    logging::StructuredLogger,
    model::ModelBundle,
    service::{InferenceService, TextVerdict, UrlVerdict},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "phishing-detector", version, about = "Phishing URL and message classifier")]
struct Cli {
    /// JSON config file
    #[arg(long, env = "PHISHING_DETECTOR_CONFIG", default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Classify one URL and print the verdict as JSON
    CheckUrl { url: String },
    /// Classify one message and print the verdict as JSON
    CheckText { text: String },
    /// Print the URL feature vector as JSON
    Features { url: String },
}

fn load_service(config: &ServiceConfig) -> anyhow::Result<InferenceService> {
    let models = ModelBundle::load(&config.model_dir)
        .with_context(|| format!("loading models from {}", config.model_dir.display()))?;
    Ok(InferenceService::new(Arc::new(models)))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServiceConfig::load(&cli.config)?;

    StructuredLogger::init(config.log.json, &config.log.level);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!(model_dir = ?config.model_dir, "phishing detector starting");
            let service = load_service(&config)?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("building tokio runtime")?;
            runtime.block_on(api::serve(service, &config.server))?;
            info!("phishing detector stopped");
        }
        Command::CheckUrl { url } => {
            let service = load_service(&config)?;
            let verdict = UrlVerdict::from(service.check_url(&url)?);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Command::CheckText { text } => {
            let service = load_service(&config)?;
            let verdict = TextVerdict::from(service.check_text(&text)?);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Command::Features { url } => {
            let fv = extract_url_features(&url);
            let named: serde_json::Map<String, serde_json::Value> = fv
                .named()
                .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&named)?);
        }
    }

    Ok(())
}
