// Parsers for the kernel pseudo-files under /proc

mod loadavg;
mod meminfo;
mod stat;

pub use loadavg::{LoadAverage, parse_loadavg};
pub use meminfo::{MemInfo, parse_meminfo};
pub use stat::{CpuTimes, parse_cpu_line};
