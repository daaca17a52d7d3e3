//! Models directory layout.
//!
//! The default profile lives directly in the models root; every other profile
//! gets a subdirectory named after it. The Silero VAD model always sits in the
//! root. Nothing in here touches the filesystem except [`profile_installed`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::manifest::{DECODER_FILE, ENCODER_FILE, TOKENIZER_FILE};
use crate::profiles::Profile;

/// Platform-specific Dictum models directory, read from the process environment.
pub fn default_models_dir() -> PathBuf {
    resolve_models_dir(|key| std::env::var_os(key))
}

/// Same as [`default_models_dir`] with the environment lookup supplied by the caller.
pub fn resolve_models_dir<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(windows) {
        windows_models_dir(env)
    } else {
        unix_models_dir(env)
    }
}

fn windows_models_dir<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    env("APPDATA")
        .map(|appdata| {
            PathBuf::from(appdata)
                .join("Lattice Labs")
                .join("Dictum")
                .join("models")
        })
        .unwrap_or_else(|| PathBuf::from("models"))
}

fn unix_models_dir<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    env("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("dictum")
        .join("models")
}

pub fn profile_dir(models_dir: &Path, profile: Profile) -> PathBuf {
    if profile.is_default() {
        models_dir.to_path_buf()
    } else {
        models_dir.join(profile.name())
    }
}

/// A profile counts as installed when encoder, decoder and tokenizer are all
/// present in `<root>/<profile>`, or directly in `<root>` for the default profile.
pub fn profile_installed(models_dir: &Path, profile: Profile) -> bool {
    let complete = |dir: &Path| {
        [ENCODER_FILE, DECODER_FILE, TOKENIZER_FILE]
            .iter()
            .all(|name| dir.join(name).exists())
    };
    complete(&models_dir.join(profile.name())) || (profile.is_default() && complete(models_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn windows_prefers_appdata() {
        let dir = windows_models_dir(env_of(&[("APPDATA", "C:/Users/me/AppData/Roaming")]));
        assert_eq!(
            dir,
            Path::new("C:/Users/me/AppData/Roaming")
                .join("Lattice Labs")
                .join("Dictum")
                .join("models")
        );
    }

    #[test]
    fn windows_without_appdata_is_relative() {
        assert_eq!(windows_models_dir(env_of(&[])), PathBuf::from("models"));
    }

    #[test]
    fn unix_prefers_xdg_data_home_over_home() {
        let dir = unix_models_dir(env_of(&[("XDG_DATA_HOME", "/data"), ("HOME", "/home/me")]));
        assert_eq!(dir, PathBuf::from("/data/dictum/models"));
    }

    #[test]
    fn unix_falls_back_to_home_then_tmp() {
        assert_eq!(
            unix_models_dir(env_of(&[("HOME", "/home/me")])),
            PathBuf::from("/home/me/.local/share/dictum/models")
        );
        assert_eq!(
            unix_models_dir(env_of(&[])),
            PathBuf::from("/tmp/.local/share/dictum/models")
        );
    }

    #[test]
    fn default_profile_is_not_nested() {
        let root = Path::new("/models");
        assert_eq!(profile_dir(root, Profile::Small), root);
        assert_eq!(profile_dir(root, Profile::SmallEn), root.join("small.en"));
        assert_eq!(
            profile_dir(root, Profile::LargeV3Turbo),
            root.join("large-v3-turbo")
        );
    }

    #[test]
    fn installed_requires_all_three_core_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("tiny.en");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(ENCODER_FILE), b"e").unwrap();
        fs::write(dir.join(DECODER_FILE), b"d").unwrap();
        assert!(!profile_installed(root.path(), Profile::TinyEn));

        fs::write(dir.join(TOKENIZER_FILE), b"{}").unwrap();
        assert!(profile_installed(root.path(), Profile::TinyEn));
        assert!(!profile_installed(root.path(), Profile::BaseEn));
    }

    #[test]
    fn default_profile_is_found_in_root() {
        let root = tempfile::tempdir().unwrap();
        for name in [ENCODER_FILE, DECODER_FILE, TOKENIZER_FILE] {
            fs::write(root.path().join(name), b"x").unwrap();
        }
        assert!(profile_installed(root.path(), Profile::Small));
        assert!(!profile_installed(root.path(), Profile::SmallEn));
    }
}
