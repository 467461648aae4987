//! Integration test crate for the Halyard protocol.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise end-to-end reward-distribution flows across multiple
//! workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p halyard-integration-tests
//! ```
