// src/run.rs

use std::path::Path;

use engine::{Report, Result};
use logging::subscriber;
use tracing::subscriber::with_default;

use crate::config::BenchConfig;

/// Checksums `path` with every strategy using `cfg`.
///
/// Diagnostics go to stderr through a subscriber scoped to this call; no
/// report lines are printed.
pub fn benchmark_with_config<P: AsRef<Path>>(path: P, cfg: &BenchConfig) -> Result<Vec<Report>> {
    let sub = subscriber(cfg.subscriber_config());
    with_default(sub, || {
        engine::run_all(path.as_ref(), &cfg.bench_options(), |_| {})
    })
}

/// Checksums `path` with every strategy and returns the four reports in
/// reporting order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a read fails. A failed
/// memory mapping is not an error; that strategy reports its start value.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use mmap_bench::{Strategy, benchmark};
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("data.bin");
/// fs::write(&path, b"hello").unwrap();
/// let reports = benchmark(&path).unwrap();
/// assert_eq!(reports[0].strategy, Strategy::SequentialRead);
/// assert_eq!(
///     reports[0].measurement.checksum(),
///     reports[3].measurement.checksum()
/// );
/// ```
pub fn benchmark<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    benchmark_with_config(path, &BenchConfig::default())
}
