// /proc/stat: first line is the aggregate "cpu" row of cumulative jiffies

use crate::error::{MonitorError, Result};

const WHAT: &str = "cpu stat";

/// Cumulative time per category since boot, in jiffies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
}

impl CpuTimes {
    pub fn idle_total(&self) -> Result<u64> {
        checked_sum(&[self.idle, self.iowait])
    }

    pub fn busy_total(&self) -> Result<u64> {
        checked_sum(&[self.user, self.nice, self.system, self.irq, self.softirq])
    }

    /// Busy share of all accounted time since boot. This is a lifetime
    /// average, not an interval-sampled rate.
    pub fn usage_percent(&self) -> Result<f64> {
        let busy = self.busy_total()?;
        let total = checked_sum(&[busy, self.idle_total()?])?;
        if total == 0 {
            return Err(MonitorError::parse(WHAT, "all counters are zero"));
        }
        Ok(busy as f64 / total as f64 * 100.0)
    }
}

fn checked_sum(counters: &[u64]) -> Result<u64> {
    counters
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or_else(|| MonitorError::parse(WHAT, "counter sum overflows"))
}

/// Parse the first line of a CPU-stat source. Counters after `softirq`
/// (steal, guest, ...) are ignored.
pub fn parse_cpu_line(content: &str) -> Result<CpuTimes> {
    let line = content
        .lines()
        .next()
        .ok_or_else(|| MonitorError::parse(WHAT, "source is empty"))?;
    let mut fields = line.split_whitespace();
    match fields.next() {
        Some("cpu") => {}
        Some(other) => {
            return Err(MonitorError::parse(
                WHAT,
                format!("expected aggregate \"cpu\" row, found {other:?}"),
            ));
        }
        None => return Err(MonitorError::parse(WHAT, "first line is blank")),
    }

    let mut counters = [0u64; 7];
    for (i, slot) in counters.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| {
            MonitorError::parse(WHAT, format!("expected 7 counters, found {i}"))
        })?;
        *slot = field
            .parse()
            .map_err(|_| MonitorError::parse(WHAT, format!("non-numeric counter {field:?}")))?;
    }
    let [user, nice, system, idle, iowait, irq, softirq] = counters;
    Ok(CpuTimes {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
    })
}
