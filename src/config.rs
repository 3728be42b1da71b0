// src/config.rs

use checksums::CrcStart;
use engine::{BenchOptions, DEFAULT_BLOCK_SIZE};
use logging::{DebugFlag, LogFormat, SubscriberConfig};

/// Configuration for a benchmark run.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub log_format: LogFormat,
    pub verbose: u8,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub timestamps: bool,
    pub block_size: usize,
    pub crc_start: CrcStart,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            verbose: 0,
            debug: Vec::new(),
            quiet: false,
            timestamps: false,
            block_size: DEFAULT_BLOCK_SIZE,
            crc_start: CrcStart::Ecma,
        }
    }
}

impl BenchConfig {
    /// Create a new builder for [`BenchConfig`].
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    pub fn bench_options(&self) -> BenchOptions {
        BenchOptions {
            block_size: self.block_size,
            crc_start: self.crc_start,
        }
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .debug(&self.debug)
            .quiet(self.quiet)
            .timestamps(self.timestamps)
            .build()
    }
}

/// Builder for [`BenchConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct BenchConfigBuilder {
    cfg: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        let mut debug = debug.into_iter().map(Into::into).collect::<Vec<_>>();
        debug.sort_by_key(|flag| flag.as_str());
        debug.dedup();
        self.cfg.debug = debug;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.cfg.block_size = block_size;
        self
    }

    pub fn crc_start(mut self, start: CrcStart) -> Self {
        self.cfg.crc_start = start;
        self
    }

    pub fn build(self) -> BenchConfig {
        self.cfg
    }
}
