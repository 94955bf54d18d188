use super::variant::InstructionVariant;

/// The catalog records for one requested mnemonic
///
/// Borrows from the catalog and keeps catalog order. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSet<'a> {
    requested: String,
    variants: Vec<&'a InstructionVariant>,
}

impl<'a> FilteredSet<'a> {
    /// Mnemonic as given by the caller
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Name of the handler method that executes this mnemonic
    pub fn handler_name(&self) -> String {
        self.requested.to_lowercase()
    }

    pub fn variants(&self) -> &[&'a InstructionVariant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Select the variants whose mnemonic equals `mnemonic` upper-cased
pub fn filter_variants<'a>(variants: &'a [InstructionVariant], mnemonic: &str) -> FilteredSet<'a> {
    let wanted = mnemonic.to_uppercase();

    FilteredSet {
        requested: mnemonic.to_string(),
        variants: variants.iter().filter(|v| v.mnemonic == wanted).collect(),
    }
}
