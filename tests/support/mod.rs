// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Individual test crates
// use different subsets, so allow dead_code at module level.
#[allow(dead_code)]
pub mod helpers;
#[allow(dead_code)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
