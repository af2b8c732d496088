// ==========================================
// Termék önköltség-számítás - configuration
// ==========================================
// User defaults: report language, default allocation bases, number
// formatting. Stored as a JSON file under the platform config dir;
// a missing file means built-in defaults, never an error.
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::types::{CompanyBasis, OperatingBasis};
use crate::i18n::Language;

/// Application defaults, all overridable from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt/report language
    pub language: Language,
    /// Default basis for the operating overhead pool
    pub operating_basis: OperatingBasis,
    /// Default basis for the company overhead pool
    pub company_basis: CompanyBasis,
    /// Decimal places in rendered tables
    pub decimal_places: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            language: Language::En,
            operating_basis: OperatingBasis::Material,
            company_basis: CompanyBasis::Restricted,
            decimal_places: 2,
        }
    }
}

impl AppConfig {
    /// Load from the default location; built-in defaults when the file
    /// does not exist.
    pub fn load() -> anyhow::Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(AppConfig::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}

/// Default config file location (platform config dir).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("product-costing").join("config.json"))
}
