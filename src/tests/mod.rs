//! Test modules for Aetheria
//!
//! Run all tests: `cargo test`
//! Run property tests only: `cargo test property --release`

mod property;
