use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Whisper model variant selecting which repository to pull from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Profile {
    #[cfg_attr(feature = "clap", value(name = "tiny.en"))]
    TinyEn,
    #[cfg_attr(feature = "clap", value(name = "base.en"))]
    BaseEn,
    /// Installed directly into the models root rather than a subdirectory.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "small"))]
    Small,
    #[cfg_attr(feature = "clap", value(name = "small.en"))]
    SmallEn,
    #[cfg_attr(feature = "clap", value(name = "large-v3-turbo"))]
    LargeV3Turbo,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::TinyEn,
        Profile::BaseEn,
        Profile::Small,
        Profile::SmallEn,
        Profile::LargeV3Turbo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Profile::TinyEn => "tiny.en",
            Profile::BaseEn => "base.en",
            Profile::Small => "small",
            Profile::SmallEn => "small.en",
            Profile::LargeV3Turbo => "large-v3-turbo",
        }
    }

    /// HuggingFace repository the profile's ONNX export lives in.
    pub fn repo(self) -> &'static str {
        match self {
            Profile::TinyEn => "onnx-community/whisper-tiny.en",
            Profile::BaseEn => "onnx-community/whisper-base.en",
            Profile::Small => "onnx-community/whisper-small",
            Profile::SmallEn => "onnx-community/whisper-small.en",
            Profile::LargeV3Turbo => "onnx-community/whisper-large-v3-turbo",
        }
    }

    /// Repository-relative paths that must be fetched on top of the standard set.
    pub fn extra_files(self) -> &'static [&'static str] {
        match self {
            // The large-v3-turbo encoder is sharded and needs its external data.
            Profile::LargeV3Turbo => &["onnx/encoder_model.onnx_data"],
            _ => &[],
        }
    }

    pub fn is_default(self) -> bool {
        self == Profile::default()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: s.to_string(),
                expected: Profile::ALL
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
