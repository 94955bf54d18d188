//! Instruction variant records as stored in the catalog
//!
//! One record describes a single opcode byte: its length, base cycle cost,
//! mnemonic and addressing mode.

use serde::{Deserialize, Deserializer, de};
use std::fmt;
use std::str::FromStr;

/// 6502 addressing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Immediate,
    Relative,
    Accumulator,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implied,
        AddressingMode::Immediate,
        AddressingMode::Relative,
        AddressingMode::Accumulator,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Canonical name, matching the `AddressingMode` variant in generated code
    pub fn name(&self) -> &'static str {
        match self {
            AddressingMode::Implied => "Implied",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::Relative => "Relative",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::ZeroPage => "ZeroPage",
            AddressingMode::ZeroPageX => "ZeroPageX",
            AddressingMode::ZeroPageY => "ZeroPageY",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "AbsoluteX",
            AddressingMode::AbsoluteY => "AbsoluteY",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::IndirectX => "IndirectX",
            AddressingMode::IndirectY => "IndirectY",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressingMode {
    type Err = String;

    /// Parse a mode name, ignoring case, `_`, `-` and spaces.
    ///
    /// Short emulator-table tags (`ZP`, `ABSX`, `INDY`, ...) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        let mode = match key.as_str() {
            "IMPLIED" | "IMP" => AddressingMode::Implied,
            "IMMEDIATE" | "IMM" => AddressingMode::Immediate,
            "RELATIVE" | "REL" => AddressingMode::Relative,
            "ACCUMULATOR" | "ACC" | "A" => AddressingMode::Accumulator,
            "ZEROPAGE" | "ZP" => AddressingMode::ZeroPage,
            "ZEROPAGEX" | "ZPX" => AddressingMode::ZeroPageX,
            "ZEROPAGEY" | "ZPY" => AddressingMode::ZeroPageY,
            "ABSOLUTE" | "ABS" => AddressingMode::Absolute,
            "ABSOLUTEX" | "ABSX" => AddressingMode::AbsoluteX,
            "ABSOLUTEY" | "ABSY" => AddressingMode::AbsoluteY,
            "INDIRECT" | "IND" => AddressingMode::Indirect,
            "INDIRECTX" | "INDX" => AddressingMode::IndirectX,
            "INDIRECTY" | "INDY" => AddressingMode::IndirectY,
            _ => return Err(format!("unknown addressing mode `{}`", s)),
        };
        Ok(mode)
    }
}

impl<'de> Deserialize<'de> for AddressingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Extra cycles an instruction may take beyond its base cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TickModifier {
    /// +1 when the branch is taken, +1 more on page cross
    Branch,
    /// +1 when indexing crosses a page boundary
    PageCrossed,
}

impl TickModifier {
    pub fn name(&self) -> &'static str {
        match self {
            TickModifier::Branch => "Branch",
            TickModifier::PageCrossed => "PageCrossed",
        }
    }
}

/// One opcode byte of the instruction set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstructionVariant {
    /// The opcode byte value
    #[serde(deserialize_with = "deserialize_code")]
    pub code: u8,
    /// Instruction length in bytes
    pub size: u8,
    /// Base cycle count
    #[serde(rename = "tick", alias = "cycles")]
    pub cycles: u8,
    /// The instruction mnemonic (e.g., "LDA")
    #[serde(rename = "name", alias = "mnemonic")]
    pub mnemonic: String,
    pub mode: AddressingMode,
    #[serde(default)]
    pub tick_modifier: Option<TickModifier>,
}

impl InstructionVariant {
    pub fn new(code: u8, size: u8, cycles: u8, mnemonic: &str, mode: AddressingMode) -> Self {
        Self {
            code,
            size,
            cycles,
            mnemonic: mnemonic.to_string(),
            mode,
            tick_modifier: None,
        }
    }

    pub fn with_tick_modifier(mut self, modifier: TickModifier) -> Self {
        self.tick_modifier = Some(modifier);
        self
    }
}

/// Parse an opcode byte from its hex text: "A9", "a9", "0xA9" or "$A9"
pub fn parse_code(text: &str) -> Result<u8, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
        .unwrap_or(text);

    if digits.len() != 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid opcode `{}`: expected two hex digits", text));
    }

    u8::from_str_radix(digits, 16)
        .map_err(|_| format!("invalid opcode `{}`: expected two hex digits", text))
}

fn deserialize_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_code(&raw).map_err(de::Error::custom)
}
