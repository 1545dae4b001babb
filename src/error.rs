// Error kinds for metric collection

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// A pseudo-file could not be opened or read.
    #[error("cannot open {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content was present but not in the expected shape.
    #[error("cannot parse {what}: {reason}")]
    Parse { what: &'static str, reason: String },

    /// No mounted filesystem matches the requested mount point.
    #[error("no filesystem mounted at {}", .mount.display())]
    MountNotFound { mount: PathBuf },

    /// The external tool could not be launched or did not finish cleanly.
    #[error("command `{command}` failed: {reason}")]
    Subprocess { command: String, reason: String },
}

impl MonitorError {
    pub(crate) fn parse(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            what,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
