use std::path::{Path, PathBuf};

use crate::config::SourcesConfig;
use crate::paths;
use crate::profiles::Profile;

pub const ENCODER_FILE: &str = "encoder_model.onnx";
pub const DECODER_FILE: &str = "decoder_model.onnx";
pub const DECODER_WITH_PAST_FILE: &str = "decoder_with_past_model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const SILERO_FILE: &str = "silero_vad.onnx";

/// One file to install: where it goes and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub filename: String,
    pub url: String,
    pub dest_dir: PathBuf,
}

impl FileSpec {
    pub fn destination(&self) -> PathBuf {
        self.dest_dir.join(&self.filename)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ManifestOptions {
    pub with_past: bool,
    pub silero: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            with_past: true,
            silero: true,
        }
    }
}

fn resolve_url(sources: &SourcesConfig, repo: &str, rel_path: &str) -> String {
    format!(
        "{}/{}/resolve/main/{}",
        sources.huggingface_base.trim_end_matches('/'),
        repo,
        rel_path
    )
}

/// Files for one profile, in install order: encoder, decoder, tokenizer,
/// optional decoder-with-past, then registered extras.
pub fn profile_files(
    profile: Profile,
    sources: &SourcesConfig,
    models_dir: &Path,
    with_past: bool,
) -> Vec<FileSpec> {
    let repo = profile.repo();
    let dest_dir = paths::profile_dir(models_dir, profile);

    let mut rel_paths: Vec<&str> = vec![
        "onnx/encoder_model.onnx",
        "onnx/decoder_model.onnx",
        "tokenizer.json",
    ];
    if with_past {
        rel_paths.push("onnx/decoder_with_past_model.onnx");
    }
    rel_paths.extend_from_slice(profile.extra_files());

    let mut files: Vec<FileSpec> = Vec::with_capacity(rel_paths.len());
    for rel in rel_paths {
        let entry = FileSpec {
            filename: rel.rsplit('/').next().unwrap_or(rel).to_string(),
            url: resolve_url(sources, repo, rel),
            dest_dir: dest_dir.clone(),
        };
        // One entry per destination; a later source for the same name wins in place.
        match files.iter_mut().find(|f| f.filename == entry.filename) {
            Some(existing) => *existing = entry,
            None => files.push(entry),
        }
    }
    files
}

/// The Silero VAD model, shared by every profile and stored in the models root.
pub fn silero_file(sources: &SourcesConfig, models_dir: &Path) -> FileSpec {
    FileSpec {
        filename: SILERO_FILE.to_string(),
        url: sources.silero_url.clone(),
        dest_dir: models_dir.to_path_buf(),
    }
}

/// Everything a run should install, profile files first and the VAD model last.
pub fn build(
    profile: Profile,
    options: ManifestOptions,
    sources: &SourcesConfig,
    models_dir: &Path,
) -> Vec<FileSpec> {
    let mut files = profile_files(profile, sources, models_dir, options.with_past);
    if options.silero {
        files.push(silero_file(sources, models_dir));
    }
    files
}
