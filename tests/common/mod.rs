// Shared test helpers: fixture pseudo-files and a canned storage provider

#![allow(dead_code)]

use std::path::Path;
use sysmon::config::SourcesConfig;
use sysmon::error::{MonitorError, Result};
use sysmon::monitor::SystemMonitor;
use sysmon::storage::StorageUsageProvider;
use tempfile::TempDir;

pub const LOADAVG: &str = "0.50 0.75 1.20 2/345 6789\n";
pub const MEMINFO: &str = "MemTotal:       1000 kB\n\
                           MemFree:         100 kB\n\
                           MemAvailable:    250 kB\n";
pub const STAT: &str = "cpu  100 0 50 800 50 0 0 0 0 0\ncpu0 50 0 25 400 25 0 0 0 0 0\n";

pub struct FixedStorage(pub Option<f64>);

impl StorageUsageProvider for FixedStorage {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn usage_percent(&self) -> Result<f64> {
        self.0.ok_or_else(|| MonitorError::Subprocess {
            command: "fixed".into(),
            reason: "unavailable".into(),
        })
    }
}

/// Write the three pseudo-files into a temp dir and return their paths.
pub fn fixture_sources(loadavg: &str, meminfo: &str, stat: &str) -> (TempDir, SourcesConfig) {
    let dir = TempDir::new().unwrap();
    let sources = SourcesConfig {
        loadavg: write(dir.path(), "loadavg", loadavg),
        meminfo: write(dir.path(), "meminfo", meminfo),
        stat: write(dir.path(), "stat", stat),
    };
    (dir, sources)
}

pub fn monitor(sources: SourcesConfig, storage: Option<f64>) -> SystemMonitor {
    SystemMonitor::with_storage(sources, Box::new(FixedStorage(storage)))
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
