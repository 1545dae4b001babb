// SystemMonitor against fixture pseudo-files

mod common;

use common::*;
use sysmon::error::MonitorError;

#[test]
fn test_load15_reads_third_field() {
    let (_dir, sources) = fixture_sources(LOADAVG, MEMINFO, STAT);
    let m = monitor(sources, Some(60.0));
    assert_eq!(m.load15().unwrap(), 1.20);
}

#[test]
fn test_memory_usage_percent() {
    let meminfo = "MemTotal: 1000 kB\nMemAvailable: 250 kB\n";
    let (_dir, sources) = fixture_sources(LOADAVG, meminfo, STAT);
    let m = monitor(sources, Some(60.0));
    assert_eq!(m.memory_usage_percent().unwrap(), 75.0);
}

#[test]
fn test_cpu_usage_percent_from_cumulative_counters() {
    let (_dir, sources) = fixture_sources(LOADAVG, MEMINFO, "cpu  100 0 50 800 50 0 0\n");
    let m = monitor(sources, Some(60.0));
    let pct = m.cpu_usage_percent().unwrap();
    assert!((pct - 15.79).abs() < 0.01, "got {pct}");
}

#[test]
fn test_collect_returns_all_four_in_order() {
    let (_dir, sources) = fixture_sources(LOADAVG, MEMINFO, STAT);
    let report = monitor(sources, Some(60.0)).collect().unwrap();
    assert_eq!(report.load15, 1.20);
    assert_eq!(report.memory_usage_percent, 75.0);
    assert_eq!(report.storage_usage_percent, 60.0);
    assert!((report.cpu_usage_percent - 15.79).abs() < 0.01);
}

#[test]
fn test_repeated_reads_are_deterministic() {
    let (_dir, sources) = fixture_sources(LOADAVG, MEMINFO, STAT);
    let m = monitor(sources, Some(42.0));
    assert_eq!(m.collect().unwrap(), m.collect().unwrap());
}

#[test]
fn test_missing_source_is_unavailable_not_zero() {
    let (dir, mut sources) = fixture_sources(LOADAVG, MEMINFO, STAT);
    sources.stat = dir.path().join("does-not-exist");
    let m = monitor(sources, Some(60.0));
    let err = m.cpu_usage_percent().unwrap_err();
    assert!(matches!(err, MonitorError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_malformed_meminfo_is_parse_error() {
    let (_dir, sources) = fixture_sources(LOADAVG, "MemFree: 10 kB\n", STAT);
    let err = monitor(sources, Some(60.0)).memory_usage_percent().unwrap_err();
    assert!(matches!(err, MonitorError::Parse { .. }));
}

#[test]
fn test_collect_stops_at_first_failure() {
    let (_dir, sources) = fixture_sources(LOADAVG, MEMINFO, "garbage\n");
    let err = monitor(sources, None).collect().unwrap_err();
    // storage fails before the broken cpu row is reached
    assert!(matches!(err, MonitorError::Subprocess { .. }));
}
