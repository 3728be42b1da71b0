// src/lib.rs
//! Compare the cost of checksumming a file through sequential and
//! alternating-ends block traversals, each over plain reads and over a
//! memory mapping.

mod config;
mod run;

pub use checksums::CrcStart;
pub use config::{BenchConfig, BenchConfigBuilder};
pub use engine::{EngineError, Measurement, Report, Result, Strategy};
pub use logging::{DebugFlag, LogFormat};
pub use run::{benchmark, benchmark_with_config};
