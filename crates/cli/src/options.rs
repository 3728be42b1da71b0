// crates/cli/src/options.rs

use std::path::PathBuf;

use checksums::CrcStart;
use clap::{ArgAction, Parser, ValueEnum};
use engine::{BenchOptions, DEFAULT_BLOCK_SIZE};
use logging::{DebugFlag, LogFormat, SubscriberConfig};

use crate::utils::parse_block_size;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum CrcStartArg {
    /// all-zero start (CRC-64/ECMA-182)
    #[default]
    Ecma,
    /// all-ones start (CRC-64/WE)
    We,
}

impl From<CrcStartArg> for CrcStart {
    fn from(arg: CrcStartArg) -> Self {
        match arg {
            CrcStartArg::Ecma => CrcStart::Ecma,
            CrcStartArg::We => CrcStart::We,
        }
    }
}

/// Time sequential and alternating-ends checksumming of a file through
/// read(2) and mmap(2).
#[derive(Parser, Debug)]
#[command(name = "mmap-bench", version)]
pub struct BenchOpts {
    /// file to checksum
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// bytes per block (K, M and G suffixes allowed)
    #[arg(
        short = 'b',
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_BLOCK_SIZE,
        value_parser = parse_block_size
    )]
    pub block_size: usize,
    /// checksum start value
    #[arg(long, value_enum, default_value_t = CrcStartArg::Ecma)]
    pub crc_start: CrcStartArg,
    /// increase diagnostic output on stderr
    #[arg(short, long, action = ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,
    /// only report errors on stderr
    #[arg(short, long, help_heading = "Diagnostics")]
    pub quiet: bool,
    #[arg(long, value_enum, default_value_t = LogFormat::Text, help_heading = "Diagnostics")]
    pub log_format: LogFormat,
    /// trace one area: io, map, hash or time
    #[arg(
        long,
        value_enum,
        value_name = "FLAG",
        value_delimiter = ',',
        help_heading = "Diagnostics"
    )]
    pub debug: Vec<DebugFlag>,
    /// prefix diagnostics with the local time
    #[arg(long, help_heading = "Diagnostics")]
    pub timestamps: bool,
}

impl BenchOpts {
    pub fn bench_options(&self) -> BenchOptions {
        BenchOptions {
            block_size: self.block_size,
            crc_start: self.crc_start.into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        BenchOpts::command().debug_assert();
    }

    #[test]
    fn defaults_match_plain_invocation() {
        let opts = BenchOpts::try_parse_from(["mmap-bench", "data.bin"]).unwrap();
        assert_eq!(opts.file, PathBuf::from("data.bin"));
        assert_eq!(opts.bench_options(), BenchOptions::default());
        assert_eq!(opts.verbose, 0);
        assert!(!opts.quiet);
        assert!(opts.debug.is_empty());
    }

    #[test]
    fn parses_all_options() {
        let opts = BenchOpts::try_parse_from([
            "mmap-bench",
            "-vv",
            "--block-size",
            "4k",
            "--crc-start",
            "we",
            "--log-format",
            "json",
            "--debug",
            "io,map",
            "--timestamps",
            "data.bin",
        ])
        .unwrap();
        assert_eq!(opts.block_size, 4096);
        assert_eq!(opts.bench_options().crc_start, CrcStart::We);
        let cfg = opts.subscriber_config();
        assert_eq!(cfg.verbose, 2);
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.debug, vec![DebugFlag::Io, DebugFlag::Map]);
        assert!(cfg.timestamps);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = BenchOpts::try_parse_from(["mmap-bench"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn zero_block_size_rejected() {
        assert!(BenchOpts::try_parse_from(["mmap-bench", "-b", "0", "f"]).is_err());
    }
}
