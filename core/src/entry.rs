use alloc::string::String;
use core::ops::Range;

use crate::file_type::FileType;

/// Location of an embedded JPEG thumbnail inside the catalog buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThumbnailSpan {
    pub offset: usize,
    pub len: usize,
}

impl ThumbnailSpan {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Metadata for one image in the catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub name: String,
    /// FILETIME ticks: 100ns intervals since 1601-01-01.
    pub file_time: u64,
    pub file_type: FileType,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub buffer_size: u32,
    pub file_size: u32,
    /// Where this record starts in the catalog file.
    pub record_offset: usize,
    pub thumbnail: Option<ThumbnailSpan>,
}

impl Entry {
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some_and(|span| span.len > 0)
    }
}
