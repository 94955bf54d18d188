use super::template::{DISPATCH_ARM, Template};
use super::{Emitter, code_literal};
use crate::catalog::FilteredSet;

/// Separator between opcode patterns in the match arm
const PATTERN_SEPARATOR: &str = " | ";

/// Emits a single match arm sending every opcode of the mnemonic to its handler
///
/// An empty set still produces an arm, with nothing left of `=>`.
#[derive(Debug, Clone, Copy)]
pub struct DispatchArmEmitter {
    template: Template,
}

impl DispatchArmEmitter {
    pub fn new() -> Self {
        Self::with_template(DISPATCH_ARM)
    }

    pub fn with_template(template: Template) -> Self {
        Self { template }
    }
}

impl Default for DispatchArmEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for DispatchArmEmitter {
    fn name(&self) -> &'static str {
        "dispatch arm"
    }

    fn emit(&self, set: &FilteredSet<'_>) -> String {
        let codes = set
            .variants()
            .iter()
            .map(|v| code_literal(v.code))
            .collect::<Vec<_>>()
            .join(PATTERN_SEPARATOR);
        let handler = set.handler_name();

        self.template
            .stamp(&[("codes", codes.as_str()), ("name", handler.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AddressingMode, InstructionVariant, filter_variants};

    fn catalog() -> Vec<InstructionVariant> {
        vec![
            InstructionVariant::new(0xA9, 2, 2, "LDA", AddressingMode::Immediate),
            InstructionVariant::new(0xA5, 2, 3, "LDA", AddressingMode::ZeroPage),
            InstructionVariant::new(0xA2, 2, 2, "LDX", AddressingMode::Immediate),
        ]
    }

    #[test]
    fn test_arm_joins_all_codes() {
        let catalog = catalog();
        let set = filter_variants(&catalog, "LDA");

        assert_eq!(
            DispatchArmEmitter::new().emit(&set),
            "0xA9 | 0xA5 => self.lda(&opcode)"
        );
    }

    #[test]
    fn test_arm_single_code() {
        let catalog = catalog();
        let set = filter_variants(&catalog, "ldx");

        assert_eq!(
            DispatchArmEmitter::new().emit(&set),
            "0xA2 => self.ldx(&opcode)"
        );
    }

    #[test]
    fn test_arm_empty_set_has_empty_patterns() {
        let catalog = catalog();
        let set = filter_variants(&catalog, "Sta");

        assert_eq!(
            DispatchArmEmitter::new().emit(&set),
            " => self.sta(&opcode)"
        );
    }

    #[test]
    fn test_arm_lists_each_code_once() {
        let catalog: Vec<InstructionVariant> = (0..8u8)
            .map(|i| InstructionVariant::new(0x10 + i, 2, 2, "NOP", AddressingMode::Immediate))
            .collect();
        let set = filter_variants(&catalog, "NOP");
        let arm = DispatchArmEmitter::new().emit(&set);
        let (patterns, _) = arm.split_once(" => ").unwrap();
        let listed: Vec<&str> = patterns.split(PATTERN_SEPARATOR).collect();

        assert_eq!(listed.len(), 8);
        for variant in &catalog {
            let literal = code_literal(variant.code);
            assert_eq!(listed.iter().filter(|p| **p == literal).count(), 1);
        }
    }
}
