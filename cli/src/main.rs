mod commands;

use anyhow::Result;
use clap::Parser;
use dictum_models_core::{Config, Profile};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dictum-models")]
#[command(author, version, about = "Download Dictum Whisper ONNX profile + Silero VAD", long_about = None)]
struct Cli {
    /// Base models directory (default: platform-specific Dictum models dir)
    #[arg(long = "models-dir", visible_alias = "dir", value_name = "PATH")]
    models_dir: Option<PathBuf>,

    /// Whisper profile to install
    #[arg(long, value_enum, default_value_t = Profile::Small)]
    profile: Profile,

    /// Skip decoder_with_past_model.onnx download
    #[arg(long)]
    no_with_past: bool,

    /// Skip silero_vad.onnx download
    #[arg(long)]
    skip_silero: bool,

    /// Re-download files even when they already exist
    #[arg(long)]
    force: bool,

    /// TOML config file with models directory, source hosts and HTTP settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List profiles and whether they are installed, then exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the per-file report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };
    let models_dir = config.models_dir(cli.models_dir.as_deref());

    if cli.list {
        commands::list::execute(&models_dir);
        return Ok(());
    }

    let args = commands::fetch::FetchArgs {
        profile: cli.profile,
        models_dir,
        with_past: !cli.no_with_past,
        silero: !cli.skip_silero,
        force: cli.force,
    };
    let exit_code = commands::fetch::execute(&config, args).await?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
