use std::io;
use std::path::PathBuf;

/// Errors that stop a generator run
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Wrong number of positional arguments
    #[error("{program} [instructions.json] OPCODE")]
    Usage { program: String },

    /// The catalog file is missing or unreadable
    #[error("cannot read catalog {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog content does not parse into instruction variants
    #[error("malformed catalog {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog records share the same opcode byte
    #[error("malformed catalog {}: duplicate opcode 0x{code:02X} ({first} and {second})", .path.display())]
    DuplicateCode {
        path: PathBuf,
        code: u8,
        first: String,
        second: String,
    },

    /// Instruction length outside 1..=3 bytes
    #[error("malformed catalog {}: opcode 0x{code:02X} has invalid size {size}", .path.display())]
    InvalidSize { path: PathBuf, code: u8, size: u8 },

    /// Writing generated text failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl GenError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Usage { .. } => 1,
            GenError::Resource { .. } => 2,
            GenError::Format { .. } | GenError::DuplicateCode { .. } | GenError::InvalidSize { .. } => 3,
            GenError::Output(_) => 4,
        }
    }

    /// True for errors caused by catalog content rather than its location
    pub fn is_format_error(&self) -> bool {
        self.exit_code() == 3
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
