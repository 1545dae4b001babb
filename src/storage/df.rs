// Storage usage from the external `df` report

use std::process::Command;

use tracing::debug;

use super::StorageUsageProvider;
use crate::error::{MonitorError, Result};

const WHAT: &str = "df output";

pub struct DfProvider {
    command: String,
    args: Vec<String>,
}

impl DfProvider {
    pub fn new(command: impl Into<String>, args: &[String]) -> Self {
        Self {
            command: command.into(),
            args: args.to_vec(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StorageUsageProvider for DfProvider {
    fn name(&self) -> &'static str {
        "df"
    }

    fn usage_percent(&self) -> Result<f64> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|e| MonitorError::Subprocess {
                command: self.command_line(),
                reason: e.to_string(),
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MonitorError::Subprocess {
                command: self.command_line(),
                reason: format!("{} ({})", output.status, stderr.trim()),
            });
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(command = %self.command_line(), bytes = output.stdout.len(), "df finished");
        parse_df_output(&stdout)
    }
}

/// Take the last non-empty line of a columnar filesystem report
/// (filesystem, total, used, available, use%, mount) and return the use%
/// column as a number.
pub fn parse_df_output(output: &str) -> Result<f64> {
    let line = output
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| MonitorError::parse(WHAT, "no output"))?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(MonitorError::parse(
            WHAT,
            format!("expected 6 columns, found {} in {line:?}", fields.len()),
        ));
    }
    let use_field = fields[4];
    let digits = use_field.strip_suffix('%').unwrap_or(use_field);
    let percent: f64 = digits.parse().map_err(|_| {
        MonitorError::parse(WHAT, format!("use% column {use_field:?} is not a number"))
    })?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(MonitorError::parse(
            WHAT,
            format!("use% {percent} outside 0..=100"),
        ));
    }
    Ok(percent)
}
