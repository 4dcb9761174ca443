use eyre::{Context, Result};
use fanlog_core::{ChannelId, RecordFormat, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main fanlog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Structured channel id
    pub channel: i32,
    /// Severity used by `process`
    pub severity: Severity,
    /// Diagnostic log level (ignored when RUST_LOG is set)
    pub log_level: LogLevel,
    /// Line format of the structured sink
    pub structured_format: RecordFormat,
    /// Sinks to wire, in dispatch order
    pub sinks: Vec<SinkKind>,
    /// Kinds that must appear in `sinks`; wiring fails otherwise
    pub required_sinks: Vec<SinkKind>,
}

/// Sink kinds the CLI can construct
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Structured,
    Text,
}

impl SinkKind {
    /// Same name as the sink's `Sink::KIND`
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Structured => "structured",
            SinkKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: ChannelId::DEFAULT.get(),
            severity: Severity::Info,
            log_level: LogLevel::default(),
            structured_format: RecordFormat::Plain,
            sinks: vec![SinkKind::Structured, SinkKind::Text],
            required_sinks: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration: explicit path, then FANLOG_CONFIG, then defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var("FANLOG_CONFIG") {
            let path = PathBuf::from(env_path);
            return Self::load_from_file(&path).context(format!(
                "Failed to load config from FANLOG_CONFIG={}",
                path.display()
            ));
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    pub fn channel_id(&self) -> ChannelId {
        ChannelId::new(self.channel)
    }
}
