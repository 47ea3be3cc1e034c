//! CLI configuration loading.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Configuration loaded from .phiz/config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhizConfig {
    /// Seed, an integer or a decimal / 0x-prefixed hex string
    #[serde(default = "default_seed")]
    pub seed: SeedSpec,

    /// Values emitted per invocation
    #[serde(default = "default_count")]
    pub count: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Uniformity smoke check settings
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedSpec {
    Number(i64),
    Text(String),
}

impl SeedSpec {
    pub fn resolve(&self) -> std::result::Result<u32, phiz::SeedError> {
        match self {
            Self::Number(n) => phiz::parse_seed(&n.to_string()),
            Self::Text(text) => phiz::parse_seed(text),
        }
    }
}

impl fmt::Display for SeedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Dec,
    Hex,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dec => "dec",
            Self::Hex => "hex",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Chi-square smoke check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_buckets")]
    pub buckets: usize,

    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Standard score for the critical value (3.09 is roughly p = 0.001)
    #[serde(default = "default_z")]
    pub z: f64,
}

fn default_seed() -> SeedSpec {
    SeedSpec::Number(0)
}
fn default_count() -> usize {
    3
}
fn default_buckets() -> usize {
    256
}
fn default_samples() -> usize {
    1_000_000
}
fn default_z() -> f64 {
    3.09
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            buckets: default_buckets(),
            samples: default_samples(),
            z: default_z(),
        }
    }
}

impl Default for PhizConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            count: default_count(),
            format: OutputFormat::default(),
            check: CheckConfig::default(),
        }
    }
}

impl PhizConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from project root (looks for .phiz/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".phiz/config.yaml");
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "Loading config");
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parsed seed value
    pub fn seed(&self) -> Result<u32> {
        self.seed
            .resolve()
            .with_context(|| format!("Invalid seed {}", self.seed))
    }

    /// Reject values that would only fail later, deeper in a command.
    pub fn validate(&self) -> Result<()> {
        self.seed()?;
        anyhow::ensure!(
            self.check.z.is_finite(),
            "check.z must be finite, got {}",
            self.check.z
        );
        Ok(())
    }
}
