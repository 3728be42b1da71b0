// crates/engine/src/strategy.rs

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use checksums::{Crc64, CrcStart};

use crate::block::{BlockLayout, DEFAULT_BLOCK_SIZE, TraversalOrder};
use crate::io::{BlockSource, DirectRead, Mapped, io_context};
use crate::{EngineError, Result};

/// Options shared by every strategy of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchOptions {
    pub block_size: usize,
    pub crc_start: CrcStart,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            crc_start: CrcStart::Ecma,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Read,
    Mmap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    SequentialRead,
    RandomRead,
    SequentialMmap,
    RandomMmap,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 4] = [
        Strategy::SequentialRead,
        Strategy::RandomRead,
        Strategy::SequentialMmap,
        Strategy::RandomMmap,
    ];

    /// Report label; padded so the four lines align.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::SequentialRead => "Sequential read",
            Strategy::RandomRead => "Random     read",
            Strategy::SequentialMmap => "Sequential mmap",
            Strategy::RandomMmap => "Random     mmap",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::SequentialRead => "sequential-read",
            Strategy::RandomRead => "random-read",
            Strategy::SequentialMmap => "sequential-mmap",
            Strategy::RandomMmap => "random-mmap",
        }
    }

    pub const fn backend(self) -> Backend {
        match self {
            Strategy::SequentialRead | Strategy::RandomRead => Backend::Read,
            Strategy::SequentialMmap | Strategy::RandomMmap => Backend::Mmap,
        }
    }

    pub const fn order(self) -> TraversalOrder {
        match self {
            Strategy::SequentialRead | Strategy::SequentialMmap => TraversalOrder::Sequential,
            Strategy::RandomRead | Strategy::RandomMmap => TraversalOrder::AlternatingEnds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    elapsed: Duration,
    checksum: u64,
}

impl Measurement {
    pub fn new(elapsed: Duration, checksum: u64) -> Self {
        Self { elapsed, checksum }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn checksum(&self) -> u64 {
        self.checksum
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub strategy: Strategy,
    pub measurement: Measurement,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : Time {:.9} seconds, Hash: {}",
            self.strategy.label(),
            self.measurement.seconds(),
            self.measurement.checksum()
        )
    }
}

/// Runs one strategy against a freshly opened `path`.
///
/// Only the traversal is timed; opening and stat'ing the file are not. A
/// failed mapping is logged and leaves the checksum at its start value.
pub fn measure(path: &Path, strategy: Strategy, opts: &BenchOptions) -> Result<Measurement> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file_len = file.metadata().map_err(|e| io_context(path, e))?.len();
    let layout = BlockLayout::new(file_len, opts.block_size)?;
    let order = strategy.order();
    let mut crc = Crc64::new(opts.crc_start);
    tracing::debug!(
        strategy = strategy.name(),
        order = order.as_str(),
        crc_start = opts.crc_start.as_str(),
        file_len,
        block_size = layout.block_size(),
        blocks = layout.count(),
        "starting run"
    );

    let start = Instant::now();
    match strategy.backend() {
        Backend::Read => {
            let mut source = DirectRead::new(file, opts.block_size, file_len);
            source
                .feed_blocks(&layout, order, &mut crc)
                .map_err(|e| io_context(path, e))?;
        }
        Backend::Mmap => match Mapped::map(&file) {
            Ok(mut source) => {
                source
                    .feed_blocks(&layout, order, &mut crc)
                    .map_err(|e| io_context(path, e))?;
            }
            Err(err) => {
                tracing::error!(target: "debug::map", "invalid mmap {file_len}: {err}");
            }
        },
    }
    let elapsed = start.elapsed();

    let measurement = Measurement::new(elapsed, crc.value());
    tracing::info!(
        "{}: {} in {:?} ({})",
        strategy.name(),
        logging::human_bytes(file_len),
        elapsed,
        logging::rate_formatter(file_len as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE)),
    );
    tracing::debug!(target: "debug::hash", checksum = measurement.checksum(), "final checksum");
    tracing::trace!(target: "debug::time", nanos = elapsed.as_nanos() as u64, "elapsed");
    Ok(measurement)
}

/// Runs every strategy in [`Strategy::ALL`] order, one after another.
///
/// `on_report` sees each report as soon as it is measured. Strategies later
/// in the list run against a page cache warmed by the earlier ones.
pub fn run_all<F>(path: &Path, opts: &BenchOptions, mut on_report: F) -> Result<Vec<Report>>
where
    F: FnMut(&Report),
{
    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let measurement = measure(path, strategy, opts)?;
        let report = Report {
            strategy,
            measurement,
        };
        on_report(&report);
        reports.push(report);
    }
    Ok(reports)
}
