//! Benchmark support crate for bowtie.
//!
//! Holds the parameter and setup-error types shared by the Criterion
//! benchmarks for edge sampling and graph statistics.

pub mod error;
pub mod params;
