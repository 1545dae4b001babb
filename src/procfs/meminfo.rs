// /proc/meminfo: one "Label:   value kB" line per counter

use crate::error::{MonitorError, Result};

const WHAT: &str = "memory info";
const TOTAL_LABEL: &str = "MemTotal:";
const AVAILABLE_LABEL: &str = "MemAvailable:";

/// Memory counters in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kb: u64,
    pub available_kb: u64,
}

impl MemInfo {
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.available_kb)
    }

    pub fn usage_percent(&self) -> f64 {
        self.used_kb() as f64 / self.total_kb as f64 * 100.0
    }
}

/// Scan for `MemTotal:` and `MemAvailable:`. The first line for each label
/// wins and scanning stops once both are seen.
///
/// `MemAvailable: 0` is accepted (a fully used system). `MemTotal` must be
/// positive and must not be smaller than `MemAvailable`.
pub fn parse_meminfo(content: &str) -> Result<MemInfo> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        if total.is_none()
            && let Some(rest) = line.strip_prefix(TOTAL_LABEL)
        {
            total = Some(leading_kb(TOTAL_LABEL, rest)?);
        } else if available.is_none()
            && let Some(rest) = line.strip_prefix(AVAILABLE_LABEL)
        {
            available = Some(leading_kb(AVAILABLE_LABEL, rest)?);
        }
        if total.is_some() && available.is_some() {
            break;
        }
    }

    let total_kb = total.ok_or_else(|| MonitorError::parse(WHAT, "MemTotal not found"))?;
    let available_kb =
        available.ok_or_else(|| MonitorError::parse(WHAT, "MemAvailable not found"))?;
    if total_kb == 0 {
        return Err(MonitorError::parse(WHAT, "MemTotal is zero"));
    }
    if available_kb > total_kb {
        return Err(MonitorError::parse(
            WHAT,
            format!("MemAvailable ({available_kb} kB) exceeds MemTotal ({total_kb} kB)"),
        ));
    }
    Ok(MemInfo {
        total_kb,
        available_kb,
    })
}

fn leading_kb(label: &str, rest: &str) -> Result<u64> {
    let token = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| MonitorError::parse(WHAT, format!("{label} has no value")))?;
    token
        .parse()
        .map_err(|_| MonitorError::parse(WHAT, format!("{label} value {token:?} is not a count")))
}
