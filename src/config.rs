use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    extract::{
        DEFAULT_CALLING_CONVENTION, DEFAULT_END_MARKER, DEFAULT_RETURN_TYPE,
        DEFAULT_START_MARKER, DeclarationRule, RegionMarkers,
    },
    validate::DuplicateCheck,
};

pub const CONFIG_FILE_NAME: &str = ".validate-methods.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default = "default_calling_convention")]
    pub calling_convention: String,
    #[serde(default = "default_start_marker")]
    pub start_marker: String,
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
    #[serde(default = "default_dispatch_function")]
    pub dispatch_function: String,
    #[serde(default = "default_availability_table")]
    pub availability_table: String,
    #[serde(default)]
    pub duplicate_check: DuplicateCheck,
}

fn default_return_type() -> String {
    DEFAULT_RETURN_TYPE.to_string()
}

fn default_calling_convention() -> String {
    DEFAULT_CALLING_CONVENTION.to_string()
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

fn default_dispatch_function() -> String {
    "nvapi_QueryInterface".to_string()
}

fn default_availability_table() -> String {
    "nvapi_interface_table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            return_type: default_return_type(),
            calling_convention: default_calling_convention(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            dispatch_function: default_dispatch_function(),
            availability_table: default_availability_table(),
            duplicate_check: DuplicateCheck::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Signature tokens must be single non-empty words. Markers are compared
    /// against trimmed lines, so they must be non-empty, already trimmed and
    /// distinct from each other.
    pub fn validate(&self) -> Result<()> {
        for (field, token) in [
            ("returnType", &self.return_type),
            ("callingConvention", &self.calling_convention),
        ] {
            if token.is_empty() || token.contains(char::is_whitespace) {
                bail!(
                    "Invalid token in '{}': \"{}\" (expected a single word)",
                    field,
                    token
                );
            }
        }

        for (field, marker) in [
            ("startMarker", &self.start_marker),
            ("endMarker", &self.end_marker),
        ] {
            if marker.is_empty() || marker.trim() != marker.as_str() {
                bail!(
                    "Invalid marker in '{}': \"{}\" (expected non-empty text without surrounding whitespace)",
                    field,
                    marker
                );
            }
        }

        if self.start_marker == self.end_marker {
            bail!(
                "'startMarker' and 'endMarker' must differ: \"{}\"",
                self.start_marker
            );
        }

        Ok(())
    }

    pub fn declaration_rule(&self) -> Result<DeclarationRule> {
        DeclarationRule::new(&self.return_type, &self.calling_convention)
    }

    pub fn region_markers(&self) -> RegionMarkers {
        RegionMarkers::new(&self.start_marker, &self.end_marker)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load config from an explicit path, or search upwards from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => {
            let config = read_config_file(&path)?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
