//! Instruction catalog: records, loading and per-mnemonic selection

mod filter;
mod store;
mod variant;

pub use filter::{FilteredSet, filter_variants};
pub use store::Catalog;
pub use variant::{AddressingMode, InstructionVariant, TickModifier, parse_code};
