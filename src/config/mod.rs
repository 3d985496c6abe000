// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for cuesort

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::classifier::{CUE_CODE_LEN, ENTITY_CODE_LEN};
use crate::tables::{self, CodeTable};

/// Main application configuration
///
/// The root directory is never part of the configuration; it is always
/// supplied per run on the command line.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// File name suffix a candidate must end with (case-sensitive)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Entity code to folder name
    #[serde(default = "default_entity_codes")]
    pub entity_codes: BTreeMap<String, String>,

    /// Cue code to action folder name
    #[serde(default = "default_cue_codes")]
    pub cue_codes: BTreeMap<String, String>,

    /// Never treat dot-files as candidates
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
}

// Default value functions
fn default_extension() -> String { ".ogg".to_string() }
fn default_entity_codes() -> BTreeMap<String, String> { tables::to_map(tables::ENTITY_CODES) }
fn default_cue_codes() -> BTreeMap<String, String> { tables::to_map(tables::CUE_CODES) }
fn default_true() -> bool { true }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            entity_codes: default_entity_codes(),
            cue_codes: default_cue_codes(),
            skip_hidden: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::CueSortError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject keys that can never match and folders outside the root
    pub fn validate(&self) -> crate::Result<()> {
        if self.extension.is_empty() {
            return Err(crate::CueSortError::Config("extension must not be empty".to_string()));
        }
        check_key_lengths("entity", &self.entity_codes, ENTITY_CODE_LEN)?;
        check_key_lengths("cue", &self.cue_codes, CUE_CODE_LEN)?;
        for (code, folder) in self.entity_codes.iter().chain(self.cue_codes.iter()) {
            if folder.is_empty() || folder == "." || folder == ".." || folder.contains(['/', '\\']) {
                return Err(crate::CueSortError::Config(format!(
                    "invalid folder name {:?} for code {}",
                    folder, code
                )));
            }
        }
        Ok(())
    }

    pub fn entity_table(&self) -> CodeTable {
        CodeTable::new(self.entity_codes.clone())
    }

    pub fn cue_table(&self) -> CodeTable {
        CodeTable::new(self.cue_codes.clone())
    }
}

fn check_key_lengths(kind: &str, codes: &BTreeMap<String, String>, len: usize) -> crate::Result<()> {
    match codes.keys().find(|code| code.chars().count() != len) {
        Some(code) => Err(crate::CueSortError::Config(format!(
            "{} code {:?} must be {} characters",
            kind, code, len
        ))),
        None => Ok(()),
    }
}
