// crates/logging/src/util.rs
#![allow(missing_docs)]

const UNITS: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

pub fn human_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0usize;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{:.2}{}", size, UNITS[unit])
    }
}

pub fn rate_formatter(bytes_per_sec: f64) -> String {
    let mut rate = bytes_per_sec / 1024.0;
    let mut units = "KB/s";
    if rate > 1024.0 {
        rate /= 1024.0;
        units = "MB/s";
        if rate > 1024.0 {
            rate /= 1024.0;
            units = "GB/s";
        }
    }
    format!("{:>7.2}{}", rate, units)
}
