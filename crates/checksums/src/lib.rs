// crates/checksums/src/lib.rs
//! Checksum algorithms for mmap-bench.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]
#![deny(warnings)]

mod crc64;

pub use crc64::{
    CRC_START_64_ECMA, CRC_START_64_WE, CRC64_ECMA_POLY, Crc64, CrcStart, crc64_ecma,
    crc64_table, crc64_update, crc64_update_byte, crc64_update_bytewise, crc64_update_slicing8,
    crc64_we,
};
