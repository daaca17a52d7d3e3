use anyhow::{Context, Result};
use dictum_models_core::{Config, HttpFetcher, InstallOptions, Installer, ManifestOptions, Profile};
use std::path::PathBuf;

pub struct FetchArgs {
    pub profile: Profile,
    pub models_dir: PathBuf,
    pub with_past: bool,
    pub silero: bool,
    pub force: bool,
}

/// Install the requested profile and return the process exit code.
pub async fn execute(config: &Config, args: FetchArgs) -> Result<i32> {
    let options = InstallOptions {
        profile: args.profile,
        models_dir: args.models_dir,
        manifest: ManifestOptions {
            with_past: args.with_past,
            silero: args.silero,
        },
        force: args.force,
    };

    println!("Base models dir: {}", options.models_dir.display());
    println!("Profile: {} ({})", options.profile, options.profile.repo());
    println!("Profile destination: {}", options.profile_dir().display());

    let fetcher = HttpFetcher::new(&config.http).context("Failed to create HTTP client")?;
    let installer = Installer::new(fetcher, config.sources.clone());
    let report = installer
        .run(&options)
        .await
        .context("Failed to prepare models directory")?;

    let failures = report.failures();
    if failures > 0 {
        eprintln!("completed with {} failure(s)", failures);
    } else {
        println!("all requested model files available");
    }

    Ok(report.exit_code())
}
