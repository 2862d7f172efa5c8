//! Session-token types shared across the Carta workspace.
//!
//! Provides JWT issue/validate helpers and the bearer `Identity` extractor.

pub mod identity;
pub mod token;
