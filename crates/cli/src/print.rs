// crates/cli/src/print.rs
use std::io::{self, Write};

use engine::Report;

use crate::exit::exit_code_from_error_kind;

/// Prints a clap error the way the binary reports it and exits.
///
/// Help and version go to stdout with status 0; everything else, including
/// a missing `FILE`, goes to stderr with the usage line and status 1.
pub fn handle_clap_error(e: clap::Error) -> ! {
    let code = exit_code_from_error_kind(e.kind());
    let _ = e.print();
    std::process::exit(code.code());
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "{report}")?;
    out.flush()
}
