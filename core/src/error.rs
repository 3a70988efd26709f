use thiserror::Error;

/// Structural problems found while decoding a catalog buffer.
///
/// Offsets are absolute byte offsets into the catalog file.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CorruptError {
    #[error("file is {len} bytes, smaller than the 1024 byte header")]
    TooSmall { len: usize },
    #[error("missing JASC BROWS FILE signature")]
    BadMagic,
    #[error("file name length {len} at offset {offset} exceeds 255 bytes")]
    NameTooLong { offset: usize, len: u32 },
    #[error("record truncated at offset {offset}")]
    Truncated { offset: usize },
    #[error("thumbnail at offset {offset} does not start with a JPEG SOI marker")]
    MissingSoi { offset: usize },
    #[error("header declares {declared} entries but only {decoded} fit in the file")]
    CountMismatch { declared: u32, decoded: u32 },
}
