//! dictum_models_core - Core library for fetching Dictum model files
//!
//! This crate provides:
//! - Whisper profile tables and the per-run file manifest
//! - Platform-specific models directory resolution
//! - Atomic HTTP downloads (temp file + rename)
//! - The install loop that applies skip/force policy and tallies failures

pub mod config;
pub mod error;
pub mod fetcher;
pub mod install;
pub mod manifest;
pub mod paths;
pub mod profiles;

pub use config::Config;
pub use error::{ConfigError, FetchError};
pub use fetcher::{Fetcher, HttpFetcher};
pub use install::{DownloadOutcome, InstallOptions, InstallReport, Installer};
pub use manifest::{FileSpec, ManifestOptions};
pub use profiles::Profile;
