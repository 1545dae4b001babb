use serde::Deserialize;
use std::path::PathBuf;

/// Config file consulted when `CONFIG_FILE` is unset. It is optional.
pub const DEFAULT_CONFIG_FILE: &str = "sysmon.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sources: SourcesConfig,
    pub storage: StorageConfig,
}

/// Pseudo-file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub loadavg: PathBuf,
    pub meminfo: PathBuf,
    pub stat: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            loadavg: "/proc/loadavg".into(),
            meminfo: "/proc/meminfo".into(),
            stat: "/proc/stat".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderKind {
    #[default]
    Df,
    Statvfs,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub provider: StorageProviderKind,
    /// External report tool for the `df` provider.
    pub command: String,
    /// `-P` keeps each filesystem on one line.
    pub args: Vec<String>,
    /// Mount point for the `statvfs` provider.
    pub mount: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::Df,
            command: "df".into(),
            args: vec!["-P".into(), "/".into()],
            mount: "/".into(),
        }
    }
}

impl AppConfig {
    /// Load from `CONFIG_FILE`, or from `sysmon.toml` if present. With neither,
    /// every setting takes its default.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_FILE)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (key, path) in [
            ("sources.loadavg", &self.sources.loadavg),
            ("sources.meminfo", &self.sources.meminfo),
            ("sources.stat", &self.sources.stat),
        ] {
            anyhow::ensure!(!path.as_os_str().is_empty(), "{} must be non-empty", key);
        }
        anyhow::ensure!(
            !self.storage.command.trim().is_empty(),
            "storage.command must be non-empty"
        );
        anyhow::ensure!(
            self.storage.mount.is_absolute(),
            "storage.mount must be an absolute path, got {}",
            self.storage.mount.display()
        );
        Ok(())
    }
}
