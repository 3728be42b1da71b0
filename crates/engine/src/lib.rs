// crates/engine/src/lib.rs
//! Block traversal, I/O backends and the strategy runner for mmap-bench.

use std::path::PathBuf;

use thiserror::Error;

pub mod block;
pub mod io;
pub mod strategy;

pub use block::{
    AlternatingEnds, BlockLayout, DEFAULT_BLOCK_SIZE, Traversal, TraversalOrder, block_count,
};
pub use io::{BlockSource, DirectRead, Mapped, io_context};
pub use strategy::{Backend, BenchOptions, Measurement, Report, Strategy, measure, run_all};

/// Error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid block size {0}")]
    InvalidBlockSize(usize),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
