//! Resolves which catalog to read and which mnemonic to generate for
//!
//! The command line is `<program> [CATALOG_PATH] MNEMONIC`. When the path is
//! omitted the catalog bundled with the repository is used; the program is
//! expected at `target/<profile>/opgen`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// Location of the bundled catalog relative to the program's directory
const DEFAULT_CATALOG: [&str; 4] = ["..", "..", "scripts", "instructions.json"];

/// Program name used in the usage line when argv is empty
const FALLBACK_PROGRAM: &str = "opgen";

/// A fully resolved generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub catalog_path: PathBuf,
    pub mnemonic: String,
    /// True when `catalog_path` came from `default_catalog_path`
    pub defaulted: bool,
}

/// Default catalog location for a program started as `program`
pub fn default_catalog_path(program: &Path) -> PathBuf {
    let mut path = match program.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    path.extend(DEFAULT_CATALOG);
    path
}

/// Resolve an invocation from the full argument list, program path first
///
/// Paths may be any OS string. A mnemonic that is not valid UTF-8 is a usage
/// error.
pub fn resolve<S: AsRef<OsStr>>(args: &[S]) -> Result<Invocation> {
    let program = args.first().map(|s| s.as_ref()).unwrap_or(OsStr::new(FALLBACK_PROGRAM));
    let positional: Vec<&OsStr> = args.iter().skip(1).map(|s| s.as_ref()).collect();
    let usage = || GenError::Usage {
        program: program.to_string_lossy().into_owned(),
    };

    let invocation = match positional.as_slice() {
        [catalog, mnemonic] => Invocation {
            catalog_path: PathBuf::from(*catalog),
            mnemonic: mnemonic.to_str().ok_or_else(usage)?.to_string(),
            defaulted: false,
        },
        [mnemonic] => Invocation {
            catalog_path: default_catalog_path(Path::new(program)),
            mnemonic: mnemonic.to_str().ok_or_else(usage)?.to_string(),
            defaulted: true,
        },
        _ => return Err(usage()),
    };

    log::debug!(
        "catalog {} ({}), mnemonic {}",
        invocation.catalog_path.display(),
        if invocation.defaulted { "default" } else { "explicit" },
        invocation.mnemonic
    );
    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals_used_directly() {
        let inv = resolve(&["opgen", "custom.json", "lda"]).unwrap();

        assert_eq!(inv.catalog_path, PathBuf::from("custom.json"));
        assert_eq!(inv.mnemonic, "lda");
        assert!(!inv.defaulted);
    }

    #[test]
    fn test_one_positional_uses_default_path() {
        let inv = resolve(&["/opt/opgen/target/release/opgen", "TYA"]).unwrap();

        assert_eq!(
            inv.catalog_path,
            Path::new("/opt/opgen/target/release")
                .join("..")
                .join("..")
                .join("scripts")
                .join("instructions.json")
        );
        assert_eq!(inv.mnemonic, "TYA");
        assert!(inv.defaulted);
    }

    #[test]
    fn test_default_path_for_bare_program_name() {
        assert_eq!(
            default_catalog_path(Path::new("opgen")),
            Path::new(".").join("..").join("..").join("scripts").join("instructions.json")
        );
    }

    #[test]
    fn test_no_positionals_is_usage_error() {
        let err = resolve(&["opgen"]).unwrap_err();

        assert!(matches!(err, GenError::Usage { .. }));
        assert_eq!(err.to_string(), "opgen [instructions.json] OPCODE");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_too_many_positionals_is_usage_error() {
        let err = resolve(&["./opgen", "a.json", "LDA", "extra", "more"]).unwrap_err();
        assert_eq!(err.to_string(), "./opgen [instructions.json] OPCODE");
    }

    #[test]
    fn test_empty_argv_uses_fallback_program_name() {
        let args: [&str; 0] = [];
        let err = resolve(&args).unwrap_err();
        assert_eq!(err.to_string(), "opgen [instructions.json] OPCODE");
    }

    #[test]
    fn test_default_path_reaches_shipped_catalog_from_target_dir() {
        let repo = Path::new(env!("CARGO_MANIFEST_DIR"));
        let program = repo.join("target").join("debug").join("opgen");
        let path = default_catalog_path(&program);

        let normalized: PathBuf = path.components().fold(PathBuf::new(), |mut acc, c| {
            match c {
                std::path::Component::ParentDir => {
                    acc.pop();
                }
                other => acc.push(other),
            }
            acc
        });
        assert_eq!(normalized, repo.join("scripts").join("instructions.json"));
        assert!(normalized.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_catalog_path_is_accepted() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("opgen"),
            OsString::from_vec(b"cat\xFFalog.json".to_vec()),
            OsString::from("lda"),
        ];
        let inv = resolve(&args).unwrap();

        assert_eq!(inv.catalog_path.as_os_str().len(), 13);
        assert_eq!(inv.mnemonic, "lda");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_mnemonic_is_usage_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from("opgen"), OsString::from_vec(vec![b'l', 0xFF, b'a'])];
        let err = resolve(&args).unwrap_err();

        assert!(matches!(err, GenError::Usage { .. }));
    }

    #[test]
    fn test_missing_catalog_is_not_checked() {
        let inv = resolve(&["opgen", "/no/such/catalog.json", "LDA"]).unwrap();
        assert_eq!(inv.catalog_path, PathBuf::from("/no/such/catalog.json"));
    }
}
