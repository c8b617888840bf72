//! Runner manifest
//!
//! The cached `runner` file. It binds one puzzle identity to the solution
//! entry point and the absolute paths of its input and entry files, so the
//! runner process needs nothing but this file to do its work.

use crate::error::{AocError, AocResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const HEADER: &str = "# Generated by aoc. Delete the cache entry to regenerate.\n\n";

/// Everything a runner process needs to verify or record one puzzle run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerManifest {
    /// `{year}/day{day}/part{part}`, for messages
    pub puzzle: String,
    /// Registered solution name
    pub entry: String,
    pub input: PathBuf,
    pub lock: PathBuf,
    pub res: PathBuf,
    pub dur: PathBuf,
    pub guard: PathBuf,
    pub generated_at: DateTime<Utc>,
}

impl RunnerManifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> AocResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AocError::io(format!("reading runner {}", path.display()), e))?;
        let manifest: Self = toml::from_str(&text).map_err(|e| AocError::RunnerInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        for file in [&manifest.input, &manifest.lock, &manifest.res, &manifest.dur] {
            if !file.is_absolute() {
                return Err(AocError::RunnerInvalid {
                    path: path.to_path_buf(),
                    reason: format!("{} is not an absolute path", file.display()),
                });
            }
        }
        Ok(manifest)
    }

    /// Manifest file contents
    pub fn render(&self) -> AocResult<String> {
        Ok(format!("{}{}", HEADER, toml::to_string(self)?))
    }
}
