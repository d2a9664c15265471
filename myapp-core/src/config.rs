// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use std::{env, fs};

pub const ENV_CONFIG: &str = "MYAPP_CONFIG";
pub const ENV_DATABASE_URL: &str = "MYAPP_DATABASE_URL";
pub const ENV_DB_MAX_CONNECTIONS: &str = "MYAPP_DB_MAX_CONNECTIONS";
pub const ENV_DB_CONNECT_TIMEOUT: &str = "MYAPP_DB_CONNECT_TIMEOUT";
pub const ENV_NAMESPACE: &str = "MYAPP_NAMESPACE";
pub const ENV_KUBECONFIG: &str = "MYAPP_KUBECONFIG";
pub const ENV_IN_CLUSTER: &str = "MYAPP_IN_CLUSTER";
pub const ENV_LOG_FORMAT: &str = "MYAPP_LOG_FORMAT";

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/mydb";
pub const DEFAULT_NAMESPACE: &str = "default";

// ---------- DATA ----------

/// Everything the entry points read from the environment, layered as
/// defaults <- TOML file <- `MYAPP_*` variables.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub log: LogSettings,
    pub database: DatabaseSettings,
    pub cluster: ClusterSettings,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub format: LogFormat,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(ConfigError::invalid(
                ENV_LOG_FORMAT,
                format!("expected \"json\" or \"text\", got {other:?}"),
            )),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    #[serde(deserialize_with = "human_duration")]
    pub connect_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterSettings {
    pub namespace: String,
    /// Explicit kubeconfig. When unset, credentials are taken from the
    /// environment (kubeconfig first, then the in-cluster service account).
    pub kubeconfig: Option<PathBuf>,
    /// Only accept the in-cluster service account.
    pub in_cluster: bool,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            kubeconfig: None,
            in_cluster: false,
        }
    }
}

fn human_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
}

// ---------- LOADING ----------

impl Settings {
    /// Resolve the config file and apply `MYAPP_*` overrides. Values that
    /// don't parse are rejected here; range checks are left to the section
    /// each entry point uses (`DatabaseSettings::validate`,
    /// `ClusterSettings::validate`).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match locate(explicit, |key| env::var(key).ok()) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(|key| env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let txt = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&txt, &path.display().to_string())
    }

    pub fn from_toml_str(txt: &str) -> Result<Self, ConfigError> {
        parse(txt, "<inline>")
    }

    /// Overlay values from `lookup` (normally `std::env::var`). Empty values
    /// count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_DATABASE_URL) {
            self.database.url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_DB_MAX_CONNECTIONS) {
            self.database.max_connections = raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::invalid(
                    ENV_DB_MAX_CONNECTIONS,
                    format!("expected a positive integer, got {raw:?}"),
                )
            })?;
        }
        if let Some(raw) = get(ENV_DB_CONNECT_TIMEOUT) {
            self.database.connect_timeout = humantime::parse_duration(raw.trim())
                .map_err(|e| ConfigError::invalid(ENV_DB_CONNECT_TIMEOUT, e.to_string()))?;
        }
        if let Some(ns) = get(ENV_NAMESPACE) {
            self.cluster.namespace = ns.trim().to_string();
        }
        if let Some(path) = get(ENV_KUBECONFIG) {
            self.cluster.kubeconfig = Some(PathBuf::from(path.trim()));
        }
        if let Some(raw) = get(ENV_IN_CLUSTER) {
            self.cluster.in_cluster = parse_bool(ENV_IN_CLUSTER, &raw)?;
        }
        if let Some(raw) = get(ENV_LOG_FORMAT) {
            self.log.format = raw.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.cluster.validate()
    }
}

impl DatabaseSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::invalid("database.url", "must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::invalid(
                "database.max_connections",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl ClusterSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::invalid("cluster.namespace", "must not be empty"));
        }
        if self.in_cluster && self.kubeconfig.is_some() {
            return Err(ConfigError::invalid(
                "cluster.in_cluster",
                "cannot be combined with cluster.kubeconfig",
            ));
        }
        Ok(())
    }
}

fn parse(txt: &str, origin: &str) -> Result<Settings, ConfigError> {
    toml::from_str(txt).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Explicit path, then `MYAPP_CONFIG`, then `<config_dir>/myapp/config.toml`
/// if it exists. The first two must exist; the last one is optional.
fn locate<F>(explicit: Option<&Path>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = lookup(ENV_CONFIG).filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(path.trim()));
    }
    dirs::config_dir()
        .map(|dir| dir.join("myapp").join("config.toml"))
        .filter(|path| path.is_file())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {raw:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_env() {
        let explicit = PathBuf::from("/etc/myapp.toml");
        let found = locate(Some(&explicit), |_| Some("/tmp/other.toml".to_string()));
        assert_eq!(found, Some(explicit));
    }

    #[test]
    fn env_path_is_used_without_explicit() {
        let found = locate(None, |key| {
            (key == ENV_CONFIG).then(|| "/tmp/from-env.toml".to_string())
        });
        assert_eq!(found, Some(PathBuf::from("/tmp/from-env.toml")));
    }

    #[test]
    fn bool_spellings() {
        assert!(parse_bool("k", "Yes").unwrap());
        assert!(!parse_bool("k", "0").unwrap());
        assert!(parse_bool("k", "maybe").is_err());
    }
}
