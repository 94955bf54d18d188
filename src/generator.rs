//! Runs a generation: resolve the invocation, load the catalog, filter it and
//! write the three artifact blocks in order.

use std::ffi::OsStr;
use std::io::Write;

use crate::catalog::{Catalog, FilteredSet, filter_variants};
use crate::emit::{DispatchArmEmitter, Emitter, TableEntryEmitter, TestStubEmitter};
use crate::error::{GenError, Result};
use crate::locator;

/// Text written between two artifact blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mnemonic: String,
    pub catalog_size: usize,
    pub matched: usize,
}

/// Ordered set of emitters writing to one output stream
pub struct Generator {
    emitters: Vec<Box<dyn Emitter>>,
}

impl Generator {
    /// Test stubs, then table entries, then the dispatch arm
    pub fn new() -> Self {
        Self {
            emitters: vec![
                Box::new(TestStubEmitter::new()),
                Box::new(TableEntryEmitter::new()),
                Box::new(DispatchArmEmitter::new()),
            ],
        }
    }

    pub fn with_emitters(emitters: Vec<Box<dyn Emitter>>) -> Self {
        Self { emitters }
    }

    /// Write every emitter's block for `set`, blank-line separated
    pub fn write_blocks<W: Write>(&self, set: &FilteredSet<'_>, out: &mut W) -> Result<()> {
        for (i, emitter) in self.emitters.iter().enumerate() {
            if i > 0 {
                out.write_all(BLOCK_SEPARATOR.as_bytes())?;
            }
            let block = emitter.emit(set);
            log::trace!("{}: {} bytes", emitter.name(), block.len());
            out.write_all(block.as_bytes())?;
            out.flush()?;
        }
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Render the blocks for `set` into a string
    pub fn render(&self, set: &FilteredSet<'_>) -> Result<String> {
        let mut buf = Vec::new();
        self.write_blocks(set, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Generate for `mnemonic` from an already loaded catalog
    pub fn generate<W: Write>(&self, catalog: &Catalog, mnemonic: &str, out: &mut W) -> Result<Report> {
        let set = filter_variants(catalog.variants(), mnemonic);

        if set.is_empty() {
            log::warn!(
                "no variants of {} in {}; emitting empty blocks",
                mnemonic.to_uppercase(),
                catalog.path().display()
            );
        } else {
            log::info!("{} variants of {}", set.len(), mnemonic.to_uppercase());
        }

        self.write_blocks(&set, out)?;

        Ok(Report {
            mnemonic: mnemonic.to_string(),
            catalog_size: catalog.len(),
            matched: set.len(),
        })
    }

    /// Full run from command-line arguments, program path first
    ///
    /// On a usage error the usage line is written to `out` and nothing else
    /// happens. Catalog errors abort before anything is written.
    pub fn run<S: AsRef<OsStr>, W: Write>(&self, args: &[S], out: &mut W) -> Result<Report> {
        let invocation = match locator::resolve(args) {
            Ok(invocation) => invocation,
            Err(err @ GenError::Usage { .. }) => {
                writeln!(out, "{}", err)?;
                out.flush()?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        let catalog = Catalog::load(&invocation.catalog_path)?;
        self.generate(&catalog, &invocation.mnemonic, out)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
