//! Whole-file decoding of a browser catalog.
//!
//! The first [`HEADER_SIZE`] bytes hold the signature, the entry count and the
//! directory name. Records follow back to back until the declared count is
//! reached.

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, warn};

use crate::entry::Entry;
use crate::error::CorruptError;
use crate::read;
use crate::record::{NO_THUMBNAIL_RECORD_LEN, decode_record};

pub const MAGIC: [u8; 16] = *b"JASC BROWS FILE\0";
pub const HEADER_SIZE: usize = 0x400;

const COUNT_OFFSET: usize = 19;
const DIRECTORY_NAME_OFFSET: usize = 23;
const DIRECTORY_NAME_MAX: usize = 0x400;
const MIN_RECORD_LEN: usize = 4 + NO_THUMBNAIL_RECORD_LEN;

/// A decoded catalog together with the buffer it was decoded from.
///
/// Thumbnails are not copied out of the buffer; [`Catalog::thumbnail`] hands
/// out slices borrowed from the catalog.
#[derive(Debug)]
pub struct Catalog<B> {
    directory_name: String,
    entries: Vec<Entry>,
    buffer: B,
}

impl<B: AsRef<[u8]>> Catalog<B> {
    /// Decodes `buffer`, taking ownership of it. Either every declared entry
    /// decodes or nothing is returned.
    pub fn parse(buffer: B) -> Result<Self, CorruptError> {
        let (directory_name, entries) = decode(buffer.as_ref())?;
        Ok(Self {
            directory_name,
            entries,
            buffer,
        })
    }

    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Thumbnail bytes for an entry of this catalog.
    pub fn thumbnail(&self, entry: &Entry) -> Option<&[u8]> {
        let span = entry.thumbnail?;
        self.buffer.as_ref().get(span.range())
    }

    /// Entries in file order, paired with their thumbnails.
    pub fn iter(&self) -> impl Iterator<Item = (&Entry, Option<&[u8]>)> + '_ {
        self.entries
            .iter()
            .map(move |entry| (entry, self.thumbnail(entry)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    pub fn into_buffer(self) -> B {
        self.buffer
    }
}

fn decode(data: &[u8]) -> Result<(String, Vec<Entry>), CorruptError> {
    if data.len() < HEADER_SIZE {
        return Err(CorruptError::TooSmall { len: data.len() });
    }
    if data[..MAGIC.len()] != MAGIC {
        return Err(CorruptError::BadMagic);
    }

    let declared = read::u32_le(data, COUNT_OFFSET)?;
    let name_end = data.len().min(DIRECTORY_NAME_OFFSET + DIRECTORY_NAME_MAX);
    let directory_name =
        String::from_utf8_lossy(read::until_nul(&data[DIRECTORY_NAME_OFFSET..name_end]))
            .into_owned();
    debug!(
        "catalog header: {} entries declared, directory {:?}, {} bytes",
        declared,
        directory_name,
        data.len()
    );

    // A count larger than the file can hold fails below; don't reserve for it.
    let fits = (data.len() - HEADER_SIZE) / MIN_RECORD_LEN;
    let mut entries = Vec::with_capacity((declared as usize).min(fits));

    let mut offset = HEADER_SIZE;
    while entries.len() < declared as usize {
        if offset >= data.len() {
            warn!(
                "catalog ends after {} of {} entries",
                entries.len(),
                declared
            );
            return Err(CorruptError::CountMismatch {
                declared,
                decoded: entries.len() as u32,
            });
        }
        let (entry, consumed) = decode_record(data, offset).inspect_err(|err| {
            warn!("entry {} at offset 0x{:x}: {}", entries.len(), offset, err);
        })?;
        offset = offset
            .checked_add(consumed)
            .filter(|&next| next <= data.len())
            .ok_or(CorruptError::Truncated { offset })?;
        entries.push(entry);
    }

    if offset < data.len() {
        debug!("{} trailing bytes after the last entry", data.len() - offset);
    }
    Ok((directory_name, entries))
}
