//! Synthetic catalogs for the decoder tests.

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{HEADER_SIZE, MAGIC};
use crate::record::THUMBNAIL_SENTINEL;

/// JPEG-looking bytes of the given length.
pub fn jpeg(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    data[..2].copy_from_slice(&[0xFF, 0xD8]);
    data
}

#[derive(Clone, Debug)]
pub struct FakeRecord {
    pub name: String,
    pub file_time: u64,
    pub file_type: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub buffer_size: u32,
    pub file_size: u32,
    pub thumbnail: Option<Vec<u8>>,
}

impl FakeRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            file_time: 0,
            file_type: 0x11,
            width: 1,
            height: 1,
            bits_per_pixel: 24,
            buffer_size: 3,
            file_size: 100,
            thumbnail: None,
        }
    }

    pub fn file_type(mut self, code: u32) -> Self {
        self.file_type = code;
        self
    }

    pub fn time(mut self, ticks: u64) -> Self {
        self.file_time = ticks;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn bpp(mut self, bits: u32) -> Self {
        self.bits_per_pixel = bits;
        self
    }

    pub fn sizes(mut self, buffer_size: u32, file_size: u32) -> Self {
        self.buffer_size = buffer_size;
        self.file_size = file_size;
        self
    }

    pub fn thumbnail(mut self, data: Vec<u8>) -> Self {
        self.thumbnail = Some(data);
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.name.len() as u32).to_le_bytes());
        out.extend_from_slice(self.name.as_bytes());
        out.extend_from_slice(&self.file_time.to_le_bytes());
        for value in [
            self.file_type,
            self.width,
            self.height,
            self.bits_per_pixel,
            self.buffer_size,
            self.file_size,
        ] {
            out.extend_from_slice(&value.to_le_bytes());
        }
        match &self.thumbnail {
            None => out.extend_from_slice(&[0u8; 4]),
            Some(data) => {
                out.extend_from_slice(&[0u8; 8]);
                out.extend_from_slice(&THUMBNAIL_SENTINEL.to_le_bytes());
                out.extend_from_slice(&(data.len() as u32).to_le_bytes());
                out.extend_from_slice(data);
            }
        }
        out
    }
}

/// Header plus records. Eight zero bytes trail the last record so a final
/// thumbnail-less record still has a readable sentinel.
pub fn catalog(directory: &str, declared: u32, records: &[FakeRecord]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&[0x01, 0x00, 0x00]);
    out.extend_from_slice(&declared.to_le_bytes());
    out.extend_from_slice(directory.as_bytes());
    out.resize(HEADER_SIZE, 0);
    for record in records {
        out.extend_from_slice(&record.encode());
    }
    out.extend_from_slice(&[0u8; 8]);
    out
}
