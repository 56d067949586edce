//! Property-based tests for the name generation engine
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! cargo test property::name_generator_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `name_generator_props`: Tests for the synthesizer
//!   - Names from built-in presets are non-empty and capitalized
//!   - Plural is the capitalized pluralization of the raw singular
//!   - Overridden consonants are the only consonants used
//!   - Meanings are present exactly when requested
//!   - Deterministic given same seed
//!
//! - `merge_props`: Tests for the profile merger
//!   - Merging an empty override is the identity
//!   - Merging never mutates its inputs
//!   - Nested tone fields merge independently
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod merge_props;
mod name_generator_props;
