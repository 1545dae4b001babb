// One-shot reads of load, memory, storage and CPU usage

use std::path::Path;

use tracing::{debug, instrument};

use crate::config::{AppConfig, SourcesConfig};
use crate::error::{MonitorError, Result};
use crate::models::MetricsReport;
use crate::procfs;
use crate::storage::{self, StorageUsageProvider};

/// Holds only where to read from; every call opens its source afresh and
/// releases it before returning.
pub struct SystemMonitor {
    sources: SourcesConfig,
    storage: Box<dyn StorageUsageProvider>,
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SystemMonitor {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_storage(config.sources.clone(), storage::from_config(&config.storage))
    }

    pub fn with_storage(sources: SourcesConfig, storage: Box<dyn StorageUsageProvider>) -> Self {
        Self { sources, storage }
    }

    /// 15-minute load average.
    #[instrument(skip(self), fields(operation = "load15"))]
    pub fn load15(&self) -> Result<f64> {
        let content = read_source(&self.sources.loadavg)?;
        let avg = procfs::parse_loadavg(&content)?;
        debug!(one = avg.one, five = avg.five, fifteen = avg.fifteen, "load average");
        Ok(avg.fifteen)
    }

    /// `(MemTotal - MemAvailable) / MemTotal * 100`.
    #[instrument(skip(self), fields(operation = "memory_usage_percent"))]
    pub fn memory_usage_percent(&self) -> Result<f64> {
        let content = read_source(&self.sources.meminfo)?;
        let info = procfs::parse_meminfo(&content)?;
        debug!(total_kb = info.total_kb, available_kb = info.available_kb, "meminfo");
        Ok(info.usage_percent())
    }

    /// Root filesystem usage from the configured provider.
    #[instrument(
        skip(self),
        fields(operation = "storage_usage_percent", provider = self.storage.name())
    )]
    pub fn storage_usage_percent(&self) -> Result<f64> {
        self.storage.usage_percent()
    }

    /// Busy share of cumulative CPU time since boot, from a single snapshot.
    #[instrument(skip(self), fields(operation = "cpu_usage_percent"))]
    pub fn cpu_usage_percent(&self) -> Result<f64> {
        let content = read_source(&self.sources.stat)?;
        let times = procfs::parse_cpu_line(&content)?;
        debug!(
            user = times.user,
            system = times.system,
            idle = times.idle,
            iowait = times.iowait,
            "cpu times"
        );
        times.usage_percent()
    }

    /// All four metrics in order. The first failure aborts the rest.
    pub fn collect(&self) -> Result<MetricsReport> {
        Ok(MetricsReport {
            load15: self.load15()?,
            memory_usage_percent: self.memory_usage_percent()?,
            storage_usage_percent: self.storage_usage_percent()?,
            cpu_usage_percent: self.cpu_usage_percent()?,
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| MonitorError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
