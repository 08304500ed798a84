//! base-endecoder-util - Test-data generation for base-endecoder
//!
//! Seeded random blobs and charsets, so failing round trips can be replayed
//! from the printed seed.

pub mod fuzzer;

pub use fuzzer::Fuzzer;
