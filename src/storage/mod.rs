// Root filesystem usage providers

mod df;
mod statvfs;

pub use df::{DfProvider, parse_df_output};
pub use statvfs::StatvfsProvider;

use crate::config::{StorageConfig, StorageProviderKind};
use crate::error::Result;

/// Source of the root filesystem's usage percentage. Callers only see the
/// percentage, so a subprocess-backed provider and a syscall-backed one are
/// interchangeable.
pub trait StorageUsageProvider {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Used space as a percentage in [0, 100].
    fn usage_percent(&self) -> Result<f64>;
}

/// Build the provider selected in config.
pub fn from_config(config: &StorageConfig) -> Box<dyn StorageUsageProvider> {
    match config.provider {
        StorageProviderKind::Df => Box::new(DfProvider::new(&config.command, &config.args)),
        StorageProviderKind::Statvfs => Box::new(StatvfsProvider::new(&config.mount)),
    }
}
