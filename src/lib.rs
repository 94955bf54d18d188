//! Source generator for 6502 opcode dispatch tables
//!
//! Given an instruction catalog and a mnemonic, `opgen` writes placeholder
//! tests, opcode table entries and a dispatch match arm for that mnemonic.

pub mod catalog;
pub mod emit;
pub mod error;
pub mod generator;
pub mod locator;

pub use error::{GenError, Result};
pub use generator::{Generator, Report};
