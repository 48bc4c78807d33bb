//! Core data types and the TOS wire format
//!
//! Defines fundamental types:
//! - Contract: strike + call/put side
//! - OptionChain: calls and puts for one underlying and expiry
//! - TOS symbol formatting (the one bit-exact output contract)

pub mod contract;
pub mod error;
pub mod symbol;

pub use contract::*;
pub use error::*;
pub use symbol::*;
