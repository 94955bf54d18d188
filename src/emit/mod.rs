//! Code emitters for one mnemonic's filtered variants
//!
//! Each emitter turns a `FilteredSet` into one block of text. Blocks carry no
//! leading or trailing blank lines; the generator lays them out.

mod dispatch_arm;
mod table_entry;
mod template;
mod test_stub;

pub use dispatch_arm::DispatchArmEmitter;
pub use table_entry::TableEntryEmitter;
pub use template::{DISPATCH_ARM, TABLE_ENTRY, TEST_STUB, Template};
pub use test_stub::TestStubEmitter;

use crate::catalog::FilteredSet;

/// Produces one artifact block from the filtered variants
pub trait Emitter {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Render the block. Must be deterministic for a given set.
    fn emit(&self, set: &FilteredSet<'_>) -> String;
}

/// Opcode byte as it appears in generated Rust, e.g. `0xA9`
pub fn code_literal(code: u8) -> String {
    format!("0x{:02X}", code)
}
