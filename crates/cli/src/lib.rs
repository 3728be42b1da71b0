// crates/cli/src/lib.rs
//! Command line front end for mmap-bench.

use std::ffi::OsString;
use std::io;

use clap::Parser;
use engine::{Report, Result};
use tracing::subscriber::with_default;

mod exit;
mod options;
mod print;
mod utils;

pub use engine::EngineError;
pub use exit::{ExitCode, exit_code_from_engine_error, exit_code_from_error_kind};
pub use options::{BenchOpts, CrcStartArg};
pub use print::{handle_clap_error, write_report};

pub fn parse_args<I, T>(args: I) -> std::result::Result<BenchOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    BenchOpts::try_parse_from(args)
}

/// Runs all four strategies, printing each report line to stdout as soon as
/// it is measured.
pub fn run(opts: &BenchOpts) -> Result<Vec<Report>> {
    let sub = logging::subscriber(opts.subscriber_config());
    with_default(sub, || {
        let mut write_err = None;
        let stdout = io::stdout();
        let reports = engine::run_all(&opts.file, &opts.bench_options(), |report| {
            if write_err.is_none() {
                if let Err(e) = write_report(&mut stdout.lock(), report) {
                    write_err = Some(e);
                }
            }
        })?;
        match write_err {
            Some(e) => Err(EngineError::Io(e)),
            None => Ok(reports),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_returns_four_reports() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("input.bin");
        fs::write(&path, vec![7u8; 100_000]).unwrap();
        let opts = parse_args([OsString::from("mmap-bench"), path.into_os_string()]).unwrap();
        let reports = run(&opts).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(
            reports[0].measurement.checksum(),
            reports[2].measurement.checksum()
        );
        assert_eq!(
            reports[1].measurement.checksum(),
            reports[3].measurement.checksum()
        );
    }

    #[test]
    fn run_reports_open_failure() {
        let tmp = tempdir().unwrap();
        let opts = parse_args([
            OsString::from("mmap-bench"),
            tmp.path().join("absent").into_os_string(),
        ])
        .unwrap();
        let err = run(&opts).unwrap_err();
        assert_eq!(exit_code_from_engine_error(&err), ExitCode::FileOpen);
    }
}
