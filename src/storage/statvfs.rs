// Storage usage from filesystem statistics (no subprocess)

use std::path::{Path, PathBuf};

use sysinfo::Disks;
use tracing::debug;

use super::StorageUsageProvider;
use crate::error::{MonitorError, Result};

const WHAT: &str = "filesystem statistics";

pub struct StatvfsProvider {
    mount: PathBuf,
}

impl StatvfsProvider {
    pub fn new(mount: impl AsRef<Path>) -> Self {
        Self {
            mount: mount.as_ref().to_path_buf(),
        }
    }
}

impl StorageUsageProvider for StatvfsProvider {
    fn name(&self) -> &'static str {
        "statvfs"
    }

    fn usage_percent(&self) -> Result<f64> {
        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == self.mount.as_path())
            .ok_or_else(|| MonitorError::MountNotFound {
                mount: self.mount.clone(),
            })?;
        let total = disk.total_space();
        let available = disk.available_space();
        debug!(mount = %self.mount.display(), total, available, "filesystem found");
        usage_from_space(total, available)
    }
}

fn usage_from_space(total: u64, available: u64) -> Result<f64> {
    if total == 0 {
        return Err(MonitorError::parse(WHAT, "filesystem reports zero size"));
    }
    let used = total.saturating_sub(available);
    Ok(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_is_used_over_total() {
        assert_eq!(usage_from_space(1000, 400).unwrap(), 60.0);
        assert_eq!(usage_from_space(1000, 2000).unwrap(), 0.0);
        assert!(usage_from_space(0, 0).is_err());
    }

    #[test]
    fn unknown_mount_is_an_error() {
        let provider = StatvfsProvider::new("/definitely/not/a/mount/point");
        let err = provider.usage_percent().unwrap_err();
        assert!(matches!(err, MonitorError::MountNotFound { .. }), "got {err}");
    }
}
