use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::variant::InstructionVariant;
use crate::error::{GenError, Result};

/// Instruction lengths the 6502 can encode
const VALID_SIZES: std::ops::RangeInclusive<u8> = 1..=3;

/// An instruction catalog loaded from a JSON file
///
/// Records keep their file order. Opcode bytes are unique and sizes are in
/// range; both are checked once when the catalog is loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    variants: Vec<InstructionVariant>,
}

impl Catalog {
    /// Read and validate the catalog at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading catalog from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| GenError::Resource {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(path, &text)?;
        log::debug!("loaded {} instruction variants", catalog.len());
        Ok(catalog)
    }

    /// Parse catalog text; `path` is only used for error reporting
    pub fn from_json(path: impl AsRef<Path>, text: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let variants: Vec<InstructionVariant> =
            serde_json::from_str(text).map_err(|source| GenError::Format {
                path: path.clone(),
                source,
            })?;

        Self::from_variants(path, variants)
    }

    /// Build a catalog from already-parsed records
    pub fn from_variants(path: impl AsRef<Path>, variants: Vec<InstructionVariant>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        validate(&path, &variants)?;
        Ok(Self { path, variants })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn variants(&self) -> &[InstructionVariant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Lookup a variant by its opcode byte
    pub fn lookup(&self, code: u8) -> Option<&InstructionVariant> {
        self.variants.iter().find(|v| v.code == code)
    }
}

fn validate(path: &Path, variants: &[InstructionVariant]) -> Result<()> {
    let mut seen: HashMap<u8, &str> = HashMap::with_capacity(variants.len());

    for variant in variants {
        if !VALID_SIZES.contains(&variant.size) {
            return Err(GenError::InvalidSize {
                path: path.to_path_buf(),
                code: variant.code,
                size: variant.size,
            });
        }

        if let Some(first) = seen.insert(variant.code, &variant.mnemonic) {
            return Err(GenError::DuplicateCode {
                path: path.to_path_buf(),
                code: variant.code,
                first: first.to_string(),
                second: variant.mnemonic.clone(),
            });
        }
    }

    Ok(())
}
