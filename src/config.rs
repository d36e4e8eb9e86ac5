//! Application configuration loaded from the environment

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::llm::ollama::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the relay
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Base URL of the Ollama server
    pub ollama_url: String,
    /// Model pulled at startup and used for replies
    pub model: String,
    /// Path or name of the `ollama` executable
    pub ollama_bin: String,
    /// Whether to launch `ollama serve` and pull the model at startup
    pub autostart: bool,
    /// Wait after launching the server before pulling
    pub settle_delay: Duration,
    /// Upper bound for `ollama pull`
    pub pull_timeout: Duration,
    /// Upper bound for a generate call
    pub generate_timeout: Duration,
    /// Upper bound for the health probe
    pub health_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            ollama_bin: "ollama".to_string(),
            autostart: true,
            settle_delay: Duration::from_secs(5),
            pull_timeout: Duration::from_secs(600),
            generate_timeout: Duration::from_secs(60),
            health_timeout: Duration::from_secs(2),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup, falling back to
    /// defaults for anything missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue {
                    name: "BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.bind_addr,
        };

        let autostart = match lookup("OLLAMA_AUTOSTART") {
            Some(value) => parse_bool("OLLAMA_AUTOSTART", &value)?,
            None => defaults.autostart,
        };

        Ok(Self {
            bind_addr,
            ollama_url: lookup("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            model: lookup("OLLAMA_MODEL").unwrap_or(defaults.model),
            ollama_bin: lookup("OLLAMA_BIN").unwrap_or(defaults.ollama_bin),
            autostart,
            settle_delay: secs(&lookup, "OLLAMA_SETTLE_SECS", defaults.settle_delay)?,
            pull_timeout: secs(&lookup, "OLLAMA_PULL_TIMEOUT_SECS", defaults.pull_timeout)?,
            generate_timeout: secs(
                &lookup,
                "OLLAMA_GENERATE_TIMEOUT_SECS",
                defaults.generate_timeout,
            )?,
            health_timeout: secs(
                &lookup,
                "OLLAMA_HEALTH_TIMEOUT_SECS",
                defaults.health_timeout,
            )?,
        })
    }
}

fn secs<F>(lookup: &F, name: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidValue {
                name,
                value,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
