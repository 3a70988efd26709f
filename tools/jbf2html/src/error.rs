use std::io;
use std::path::PathBuf;

use jbf_core::CorruptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JbfError {
    #[error("cannot open {}: {source}", .path.display())]
    Argument {
        path: PathBuf,
        source: io::Error,
    },
    #[error("cannot load {} into memory: {source}", .path.display())]
    Memory {
        path: PathBuf,
        source: io::Error,
    },
    #[error("corrupt catalog: {0}")]
    Corrupt(#[from] CorruptError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Argument,
    Memory,
    Corrupt,
    Io,
}

impl JbfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JbfError::Argument { .. } => ErrorKind::Argument,
            JbfError::Memory { .. } => ErrorKind::Memory,
            JbfError::Corrupt(_) => ErrorKind::Corrupt,
            JbfError::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for the command line tool.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Argument => 1,
            ErrorKind::Memory => 2,
            ErrorKind::Corrupt => 3,
            ErrorKind::Io => 4,
        }
    }
}
