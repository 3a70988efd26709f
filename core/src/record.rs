//! Decoding of a single variable-length catalog record.
//!
//! A record is a little-endian `u32` file name length, the file name bytes and
//! a fixed block of fields. Records carrying a thumbnail append the JPEG data
//! after the fixed block:
//!
//! ```text
//! +0   u32  name length L (<= 255)
//! +4   [L]  name
//! +4+L u64  file time      +8  u32 file type    +12 u32 width
//!      +16  u32 height     +20 u32 bpp          +24 u32 buffer size
//!      +28  u32 file size  +32 [8] reserved     +40 u32 thumbnail sentinel
//!      +44  u32 thumbnail size                  +48 [size] JPEG data
//! ```

use alloc::string::String;
use log::trace;

use crate::entry::{Entry, ThumbnailSpan};
use crate::error::CorruptError;
use crate::file_type::FileType;
use crate::read;

pub const MAX_NAME_LEN: u32 = 255;
pub const THUMBNAIL_SENTINEL: u32 = 0xFFFF_FFFF;
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Bytes a thumbnail-less record occupies after its file name.
///
/// Smaller than [`RECORD_HEADER_LEN`] even though the sentinel is read at +40.
/// Catalogs written by the browser are laid out this way.
pub const NO_THUMBNAIL_RECORD_LEN: usize = 36;

/// Fixed fields after the file name in a thumbnail-bearing record.
pub const RECORD_HEADER_LEN: usize = 48;

const NAME_LEN_FIELD: usize = 4;

const FILE_TIME: usize = 0;
const FILE_TYPE: usize = 8;
const WIDTH: usize = 12;
const HEIGHT: usize = 16;
const BITS_PER_PIXEL: usize = 20;
const BUFFER_SIZE: usize = 24;
const FILE_SIZE: usize = 28;
const SENTINEL: usize = 40;
const THUMBNAIL_SIZE: usize = 44;

/// Decodes the record starting at `offset`.
///
/// Returns the entry and the number of bytes the record occupies.
pub fn decode_record(data: &[u8], offset: usize) -> Result<(Entry, usize), CorruptError> {
    let name_len = read::u32_le(data, offset)?;
    if name_len > MAX_NAME_LEN {
        return Err(CorruptError::NameTooLong {
            offset,
            len: name_len,
        });
    }
    let name_len = name_len as usize;
    let name_bytes = read::slice(data, offset + NAME_LEN_FIELD, name_len)?;
    let name = String::from_utf8_lossy(read::until_nul(name_bytes)).into_owned();

    let fields = offset + NAME_LEN_FIELD + name_len;
    // The sentinel has to be readable even for records that end before it.
    read::slice(data, fields, SENTINEL + 4)?;

    let mut entry = Entry {
        name,
        file_time: read::u64_le(data, fields + FILE_TIME)?,
        file_type: FileType::from_code(read::u32_le(data, fields + FILE_TYPE)?),
        width: read::u32_le(data, fields + WIDTH)?,
        height: read::u32_le(data, fields + HEIGHT)?,
        bits_per_pixel: read::u32_le(data, fields + BITS_PER_PIXEL)?,
        buffer_size: read::u32_le(data, fields + BUFFER_SIZE)?,
        file_size: read::u32_le(data, fields + FILE_SIZE)?,
        record_offset: offset,
        thumbnail: None,
    };

    let sentinel = read::u32_le(data, fields + SENTINEL)?;
    if sentinel != THUMBNAIL_SENTINEL {
        // raw files are stored without a thumbnail
        let consumed = NAME_LEN_FIELD + name_len + NO_THUMBNAIL_RECORD_LEN;
        trace_record(&entry, sentinel, consumed);
        return Ok((entry, consumed));
    }

    let thumbnail_len = read::u32_le(data, fields + THUMBNAIL_SIZE)? as usize;
    let thumbnail_offset = fields + RECORD_HEADER_LEN;
    let thumbnail = read::slice(data, thumbnail_offset, thumbnail_len)?;
    if !thumbnail.starts_with(&JPEG_SOI) {
        return Err(CorruptError::MissingSoi {
            offset: thumbnail_offset,
        });
    }
    entry.thumbnail = Some(ThumbnailSpan {
        offset: thumbnail_offset,
        len: thumbnail_len,
    });

    let consumed = NAME_LEN_FIELD + name_len + RECORD_HEADER_LEN + thumbnail_len;
    trace_record(&entry, sentinel, consumed);
    Ok((entry, consumed))
}

fn trace_record(entry: &Entry, sentinel: u32, consumed: usize) {
    trace!(
        "record @0x{:08x}: name={:?} filetime=0x{:016x} filetype=0x{:x} {}x{} bpp={} bufsize={} filesize={} thumbmagic=0x{:08x} thumbsize={} len={}",
        entry.record_offset,
        entry.name,
        entry.file_time,
        entry.file_type.code(),
        entry.width,
        entry.height,
        entry.bits_per_pixel,
        entry.buffer_size,
        entry.file_size,
        sentinel,
        entry.thumbnail.map_or(0, |span| span.len),
        consumed
    );
}
