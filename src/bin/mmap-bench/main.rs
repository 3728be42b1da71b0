// src/bin/mmap-bench/main.rs

use mmap_bench_cli::{exit_code_from_engine_error, handle_clap_error, parse_args, run};

fn main() {
    let opts = parse_args(std::env::args_os()).unwrap_or_else(|e| handle_clap_error(e));
    if let Err(e) = run(&opts) {
        eprintln!("{e}");
        std::process::exit(exit_code_from_engine_error(&e).code());
    }
}
