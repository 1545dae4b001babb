// Collected metrics and their console rendering

use std::fmt;

pub const HEADER: &str = "=== Linux System Resource Monitor ===";
pub const COLLECTING: &str = "Collecting system information...";
pub const COMPLETED: &str = "✅ Monitoring complete!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsReport {
    pub load15: f64,
    pub memory_usage_percent: f64,
    pub storage_usage_percent: f64,
    pub cpu_usage_percent: f64,
}

/// One labeled line per metric, in collection order.
impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 CPU 15-minute load average: {:.2}", self.load15)?;
        writeln!(f, "💾 Memory usage: {:.2}%", self.memory_usage_percent)?;
        writeln!(f, "💽 Storage usage: {:.2}%", self.storage_usage_percent)?;
        write!(f, "⚡ CPU usage: {:.2}%", self.cpu_usage_percent)
    }
}
