//! The install loop: walk the manifest, skip what is already there, fetch the
//! rest one file at a time and keep going past failures.

use std::fs;
use std::path::PathBuf;

use crate::config::SourcesConfig;
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::manifest::{self, FileSpec, ManifestOptions};
use crate::paths;
use crate::profiles::Profile;

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub profile: Profile,
    pub models_dir: PathBuf,
    pub manifest: ManifestOptions,
    /// Re-download files that already exist
    pub force: bool,
}

impl InstallOptions {
    pub fn new(profile: Profile, models_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            models_dir: models_dir.into(),
            manifest: ManifestOptions::default(),
            force: false,
        }
    }

    pub fn profile_dir(&self) -> PathBuf {
        paths::profile_dir(&self.models_dir, self.profile)
    }
}

#[derive(Debug)]
pub enum DownloadOutcome {
    Skipped,
    Fetched { bytes: u64 },
    Failed { error: FetchError },
}

impl DownloadOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, DownloadOutcome::Failed { .. })
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub file: FileSpec,
    pub outcome: DownloadOutcome,
}

#[derive(Debug, Default)]
pub struct InstallReport {
    pub files: Vec<FileReport>,
}

impl InstallReport {
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_failure()).count()
    }

    pub fn fetched(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, DownloadOutcome::Fetched { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, DownloadOutcome::Skipped))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    /// Process exit code: 1 if any file failed, otherwise 0.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub struct Installer<F> {
    fetcher: F,
    sources: SourcesConfig,
}

impl<F: Fetcher> Installer<F> {
    pub fn new(fetcher: F, sources: SourcesConfig) -> Self {
        Self { fetcher, sources }
    }

    pub fn manifest(&self, options: &InstallOptions) -> Vec<FileSpec> {
        manifest::build(
            options.profile,
            options.manifest,
            &self.sources,
            &options.models_dir,
        )
    }

    /// Install every file in the manifest, printing one status line per file.
    ///
    /// Per-file failures are recorded in the report; only failing to create the
    /// models or profile directory aborts the run.
    pub async fn run(&self, options: &InstallOptions) -> Result<InstallReport, FetchError> {
        let profile_dir = options.profile_dir();
        for dir in [&options.models_dir, &profile_dir] {
            fs::create_dir_all(dir)
                .map_err(|e| FetchError::io("failed to create directory", dir.as_path(), e))?;
        }

        let files = self.manifest(options);
        tracing::info!(
            profile = %options.profile,
            files = files.len(),
            force = options.force,
            "installing model files"
        );

        let mut report = InstallReport::default();
        for file in files {
            let outcome = self.install_one(&file, options.force).await;
            report.files.push(FileReport { file, outcome });
        }

        tracing::info!(
            fetched = report.fetched(),
            skipped = report.skipped(),
            failures = report.failures(),
            "install finished"
        );
        Ok(report)
    }

    async fn install_one(&self, file: &FileSpec, force: bool) -> DownloadOutcome {
        let dest = file.destination();
        if dest.exists() && !force {
            println!("skip   {} (already exists)", file.filename);
            return DownloadOutcome::Skipped;
        }

        println!("fetch  {}", file.filename);
        match self.fetcher.fetch(&file.url, &dest).await {
            Ok(bytes) => {
                println!("ok     {} ({} bytes)", file.filename, bytes);
                DownloadOutcome::Fetched { bytes }
            }
            Err(error) => {
                eprintln!("error  {}: {}", file.filename, error);
                DownloadOutcome::Failed { error }
            }
        }
    }
}
