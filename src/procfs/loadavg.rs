// /proc/loadavg: "0.50 0.75 1.20 2/345 6789"

use crate::error::{MonitorError, Result};

const WHAT: &str = "load average";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Parse the first line of a load-average source. Trailing fields
/// (runnable/total tasks, last pid) are ignored.
pub fn parse_loadavg(content: &str) -> Result<LoadAverage> {
    let line = content
        .lines()
        .next()
        .ok_or_else(|| MonitorError::parse(WHAT, "source is empty"))?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(MonitorError::parse(
            WHAT,
            format!("expected 3 averages, found {} fields", fields.len()),
        ));
    }
    Ok(LoadAverage {
        one: parse_average(fields[0])?,
        five: parse_average(fields[1])?,
        fifteen: parse_average(fields[2])?,
    })
}

fn parse_average(field: &str) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| MonitorError::parse(WHAT, format!("non-numeric field {field:?}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(MonitorError::parse(
            WHAT,
            format!("average out of range: {field}"),
        ));
    }
    Ok(value)
}
