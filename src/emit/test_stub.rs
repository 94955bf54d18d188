use super::Emitter;
use super::template::{TEST_STUB, Template};
use crate::catalog::{FilteredSet, InstructionVariant};

/// Emits one failing placeholder `#[test]` per opcode variant
///
/// Test names look like `opcode_0xa9_immediate_lda`, unique per opcode byte.
#[derive(Debug, Clone, Copy)]
pub struct TestStubEmitter {
    template: Template,
}

impl TestStubEmitter {
    pub fn new() -> Self {
        Self::with_template(TEST_STUB)
    }

    pub fn with_template(template: Template) -> Self {
        Self { template }
    }

    /// Render the stub for a single variant
    pub fn stub(&self, variant: &InstructionVariant) -> String {
        let code = format!("{:02x}", variant.code);
        let mode = variant.mode.name().to_lowercase();
        let name = variant.mnemonic.to_lowercase();

        self.template
            .stamp(&[("code", code.as_str()), ("mode", mode.as_str()), ("name", name.as_str())])
    }
}

impl Default for TestStubEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for TestStubEmitter {
    fn name(&self) -> &'static str {
        "test stubs"
    }

    fn emit(&self, set: &FilteredSet<'_>) -> String {
        let stubs: Vec<String> = set.variants().iter().map(|v| self.stub(v)).collect();
        stubs.join("\n").trim_end().to_string()
    }
}
