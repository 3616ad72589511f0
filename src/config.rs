use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::lexicon::Category;

/// Root configuration structure, deserialized from `.footprint-sentinel/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extra keywords merged into the built-in lexicon.
    #[serde(default)]
    pub lexicon: LexiconConfig,
    /// Thresholds for turning platform scores into alerts.
    #[serde(default)]
    pub alerts: AlertConfig,
}

/// Additional keywords per lexicon category. Category weights are fixed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default)]
    pub high_risk: Vec<String>,
    #[serde(default)]
    pub medium_risk: Vec<String>,
    #[serde(default)]
    pub low_risk: Vec<String>,
    #[serde(default)]
    pub privacy: Vec<String>,
    #[serde(default)]
    pub professional_positive: Vec<String>,
    #[serde(default)]
    pub professional_negative: Vec<String>,
}

impl LexiconConfig {
    pub fn extra_terms(&self, category: Category) -> &[String] {
        match category {
            Category::HighRisk => &self.high_risk,
            Category::MediumRisk => &self.medium_risk,
            Category::LowRisk => &self.low_risk,
            Category::Privacy => &self.privacy,
            Category::ProfessionalPositive => &self.professional_positive,
            Category::ProfessionalNegative => &self.professional_negative,
        }
    }
}

/// Score thresholds for [`crate::alerts::derive`]. All bounds are exclusive.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertConfig {
    /// No alert is raised at or below this score.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_high_above")]
    pub high_above: f64,
    #[serde(default = "default_medium_above")]
    pub medium_above: f64,
}

fn default_min_score() -> f64 {
    20.0
}

fn default_high_above() -> f64 {
    50.0
}

fn default_medium_above() -> f64 {
    25.0
}

impl Default for AlertConfig {
    fn default() -> Self {
        AlertConfig {
            min_score: default_min_score(),
            high_above: default_high_above(),
            medium_above: default_medium_above(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_dir>/.footprint-sentinel/config.toml`
/// 3. `~/.config/footprint-sentinel/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = base_dir.join(".footprint-sentinel").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("footprint-sentinel")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using built-in defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
