//! Builders for synthetic catalog files.
#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const MAGIC: &[u8; 16] = b"JASC BROWS FILE\0";
pub const HEADER_SIZE: usize = 1024;

/// FILETIME of 2001-09-09 01:46:40 UTC.
pub const SEPT_2001: u64 = 126_444_736_000_000_000;

/// Bytes that start like a JPEG but carry no decodable image.
pub fn fake_jpeg(len: usize) -> Vec<u8> {
    let mut data = vec![0x5A; len];
    data[..2].copy_from_slice(&[0xFF, 0xD8]);
    data
}

/// A real baseline JPEG of the given size.
pub fn real_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .expect("encode jpeg");
    bytes
}

#[derive(Clone, Debug)]
pub struct Record {
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

impl Record {
    pub fn jpeg(name: &str, thumbnail: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_time: SEPT_2001,
            file_type: 0x11,
            width: 640,
            height: 480,
            bits_per_pixel: 24,
            buffer_size: 640 * 480 * 3,
            file_size: 48_213,
            thumbnail: Some(thumbnail),
        }
    }

    pub fn raw(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file_time: SEPT_2001,
            file_type: 0x00,
            width: 2048,
            height: 1536,
            bits_per_pixel: 8,
            buffer_size: 2048 * 1536,
            file_size: 2048 * 1536,
            thumbnail: None,
        }
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
                out.extend_from_slice(&u32::MAX.to_le_bytes());
                out.extend_from_slice(&(data.len() as u32).to_le_bytes());
                out.extend_from_slice(data);
            }
        }
        out
    }
}

/// Header and records, followed by eight bytes of padding.
pub fn catalog_bytes(directory: &str, declared: u32, records: &[Record]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&[0, 0, 0]);
    out.extend_from_slice(&declared.to_le_bytes());
    out.extend_from_slice(directory.as_bytes());
    out.resize(HEADER_SIZE, 0);
    for record in records {
        out.extend_from_slice(&record.encode());
    }
    out.extend_from_slice(&[0u8; 8]);
    out
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write catalog");
    path
}
