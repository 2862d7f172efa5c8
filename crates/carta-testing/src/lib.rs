//! Test utilities for Carta services.
//!
//! Provides `TestIdentity` for minting bearer tokens in integration tests.
//! Import in `#[cfg(test)]` blocks and `tests/` targets only — never in
//! production code.

pub mod auth;
