use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Application configuration module
/// Defaults reproduce the fixed batch layout: English episodes in,
/// Burmese episodes out, markdown files only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory the chapter files are read from
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory the translated chapters are written to, created if absent
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// File extension of eligible chapter files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Show a progress bar on stderr while the batch runs
    #[serde(default)]
    pub show_progress: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How body text and heading titles are converted
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    // @mode: Substitute glossary terms
    #[default]
    Glossary,
    // @mode: Copy text unchanged
    Passthrough,
}

impl TranslationMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Glossary => "glossary".to_string(),
            Self::Passthrough => "passthrough".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for TranslationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "glossary" => Ok(Self::Glossary),
            "passthrough" => Ok(Self::Passthrough),
            _ => Err(AppError::Config(format!("Invalid translation mode: {}", s)).into()),
        }
    }
}

/// Translation settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TranslationConfig {
    /// Translation mode
    #[serde(default)]
    pub mode: TranslationMode,

    /// Optional JSON glossary merged over the built-in tables
    #[serde(default)]
    pub glossary_path: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("eng-episodes/0001-0100")
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("burmese-episodes/0001-0100")
}

fn default_extension() -> String {
    "md".to_string()
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(AppError::Config("source_dir must not be empty".to_string()).into());
        }

        if self.target_dir.as_os_str().is_empty() {
            return Err(AppError::Config("target_dir must not be empty".to_string()).into());
        }

        // Translating in place would read files we have already overwritten
        if self.source_dir == self.target_dir {
            return Err(AppError::Config(format!(
                "source_dir and target_dir must differ: {:?}",
                self.source_dir
            ))
            .into());
        }

        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(AppError::Config(format!("Invalid file extension: '{}'", self.extension)).into());
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
            extension: default_extension(),
            translation: TranslationConfig::default(),
            show_progress: false,
            log_level: LogLevel::default(),
        }
    }
}
