//! Market data access
//!
//! Handles:
//! - The `ChainProvider` abstraction consumed by the export pipeline
//! - Yahoo Finance API for expirations, chains, and the last close (free)

pub mod provider;
pub mod yahoo;

pub use provider::*;
pub use yahoo::*;
