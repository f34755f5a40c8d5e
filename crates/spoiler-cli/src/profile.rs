//! Reader profile - persisted progress and gate preferences.
//!
//! Stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.spoiler-gate.Spoiler-Gate/
//! - Windows: %APPDATA%/spoiler-gate/Spoiler Gate/config/
//! - Linux: ~/.config/spoilergate/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use spoiler_core::{GatePolicy, ProgressSource, ProgressState};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "spoiler-gate";
const APP_NAME: &str = "Spoiler Gate";
const PROFILE_FILENAME: &str = "profile.toml";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persisted reader profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderProfile {
    pub progress: ProgressSettings,
    pub gate: GatePolicy,
}

/// The `[progress]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Chapters read.
    pub raw_progress: u32,
    /// 0 disables the override.
    pub tolerance_override: u32,
    pub show_all: bool,
}

impl From<ProgressSettings> for ProgressState {
    fn from(settings: ProgressSettings) -> Self {
        ProgressState::new(settings.raw_progress)
            .with_tolerance_override(settings.tolerance_override)
            .with_show_all(settings.show_all)
    }
}

/// Command-line values that take precedence over the stored profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub raw_progress: Option<u32>,
    pub tolerance_override: Option<u32>,
    pub show_all: Option<bool>,
    pub untagged_threshold: Option<u32>,
}

impl ReaderProfile {
    pub fn progress_state(&self) -> ProgressState {
        self.progress.into()
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ProfileOverrides) -> Self {
        if let Some(value) = overrides.raw_progress {
            self.progress.raw_progress = value;
        }
        if let Some(value) = overrides.tolerance_override {
            self.progress.tolerance_override = value;
        }
        if let Some(value) = overrides.show_all {
            self.progress.show_all = value;
        }
        if let Some(value) = overrides.untagged_threshold {
            self.gate.untagged_threshold = value;
        }
        self
    }

    /// Load a profile, treating a missing file as the default profile.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ProfileError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ProfileError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no profile found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ProfileError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Like [`ReaderProfile::load_from`] but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(profile) => profile,
            Err(error) => {
                tracing::warn!("{error}, using defaults");
                Self::default()
            }
        }
    }

    /// Save the profile, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ProfileError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "profile saved");
        Ok(())
    }
}

impl ProgressSource for ReaderProfile {
    fn progress(&self) -> ProgressState {
        self.progress_state()
    }
}

/// Default profile location.
///
/// # Errors
///
/// Fails when the platform has no resolvable config directory.
pub fn default_profile_path() -> Result<PathBuf, ProfileError> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PROFILE_FILENAME))
        .ok_or(ProfileError::NoConfigDir)
}

/// Explicit path if given, otherwise the default location.
///
/// # Errors
///
/// See [`default_profile_path`].
pub fn resolve_profile_path(explicit: Option<&Path>) -> Result<PathBuf, ProfileError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_profile_path(),
    }
}
