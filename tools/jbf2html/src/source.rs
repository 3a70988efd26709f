use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use jbf_core::{CorruptError, HEADER_SIZE};
use log::debug;
use memmap2::Mmap;

use crate::error::JbfError;

/// How the catalog file is brought into memory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Read-only memory map of the file.
    #[default]
    Map,
    /// Whole file read into an owned buffer.
    Read,
}

#[derive(Clone, Debug, Default)]
pub struct OpenOptions {
    pub load_mode: LoadMode,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }
}

/// Read-only contents of a catalog file. Dropping it unmaps or frees the buffer.
#[derive(Debug)]
pub enum ByteSource {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl ByteSource {
    pub fn open(path: &Path, mode: LoadMode) -> Result<Self, JbfError> {
        let argument = |source: io::Error| JbfError::Argument {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(argument)?;
        let metadata = file.metadata().map_err(argument)?;
        if !metadata.is_file() {
            return Err(argument(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        let len = metadata.len();
        if len < HEADER_SIZE as u64 {
            return Err(CorruptError::TooSmall { len: len as usize }.into());
        }
        let len = usize::try_from(len).map_err(|_| {
            memory_error(
                path,
                io::Error::new(io::ErrorKind::OutOfMemory, "file exceeds the address space"),
            )
        })?;

        debug!("loading {} ({} bytes, {:?})", path.display(), len, mode);
        match mode {
            LoadMode::Map => {
                // SAFETY: the map is only ever read; the file is expected not to
                // shrink while the catalog is open.
                let map = unsafe { Mmap::map(&file) }.map_err(|err| memory_error(path, err))?;
                Ok(ByteSource::Mapped(map))
            }
            LoadMode::Read => {
                let mut buffer = Vec::new();
                buffer.try_reserve_exact(len).map_err(|err| {
                    memory_error(path, io::Error::new(io::ErrorKind::OutOfMemory, err))
                })?;
                (&file)
                    .take(len as u64)
                    .read_to_end(&mut buffer)
                    .map_err(|err| memory_error(path, err))?;
                Ok(ByteSource::Owned(buffer))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, ByteSource::Mapped(_))
    }
}

impl AsRef<[u8]> for ByteSource {
    fn as_ref(&self) -> &[u8] {
        match self {
            ByteSource::Mapped(map) => &map[..],
            ByteSource::Owned(buffer) => buffer.as_slice(),
        }
    }
}

impl Deref for ByteSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_ref()
    }
}

fn memory_error(path: &Path, source: io::Error) -> JbfError {
    JbfError::Memory {
        path: PathBuf::from(path),
        source,
    }
}
