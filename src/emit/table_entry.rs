use super::template::{TABLE_ENTRY, Template};
use super::{Emitter, code_literal};
use crate::catalog::{FilteredSet, InstructionVariant};

/// Emits `(code, Opcode::new(..))` lines for the static opcode table
#[derive(Debug, Clone, Copy)]
pub struct TableEntryEmitter {
    template: Template,
}

impl TableEntryEmitter {
    pub fn new() -> Self {
        Self::with_template(TABLE_ENTRY)
    }

    pub fn with_template(template: Template) -> Self {
        Self { template }
    }

    /// Render the table line for a single variant
    pub fn entry(&self, variant: &InstructionVariant) -> String {
        let code = code_literal(variant.code);
        let size = variant.size.to_string();
        let tick = variant.cycles.to_string();
        let modifier = match variant.tick_modifier {
            Some(m) => format!("Some(TickModifier::{})", m.name()),
            None => "None".to_string(),
        };

        self.template.stamp(&[
            ("code", code.as_str()),
            ("size", size.as_str()),
            ("tick", tick.as_str()),
            ("name", variant.mnemonic.as_str()),
            ("mode", variant.mode.name()),
            ("modifier", modifier.as_str()),
        ])
    }
}

impl Default for TableEntryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for TableEntryEmitter {
    fn name(&self) -> &'static str {
        "table entries"
    }

    fn emit(&self, set: &FilteredSet<'_>) -> String {
        set.variants()
            .iter()
            .map(|v| self.entry(v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
