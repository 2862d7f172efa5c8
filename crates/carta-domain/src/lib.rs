//! Domain types shared across the Carta workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod restaurant;
pub mod translation;
pub mod user;
