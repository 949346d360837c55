// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DebtError, DebtResult};
use crate::models::MonthFilter;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Debtbook", "debtbook"));

pub const CONFIG_ENV: &str = "DEBTBOOK_CONFIG";
const CONFIG_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Month selector active when a session starts.
    pub default_filter: MonthFilter,
    pub ascii_tables: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_filter: MonthFilter::General,
            ascii_tables: false,
            log_filter: "debtbook=warn".to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join(CONFIG_FILE))
}

/// Explicit path first, then `DEBTBOOK_CONFIG`, then the platform config dir.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(default_config_path)
}

impl Settings {
    /// Reads settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> DebtResult<Settings> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw)
            .map_err(|err| DebtError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn load(explicit: Option<&Path>) -> DebtResult<Settings> {
        match resolve_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }
}
