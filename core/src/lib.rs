#![cfg_attr(not(test), no_std)]

pub mod catalog;
pub mod entry;
pub mod error;
pub mod file_type;
pub mod record;

mod read;

#[cfg(test)]
mod fixture;

extern crate alloc;

pub use catalog::{Catalog, HEADER_SIZE, MAGIC};
pub use entry::{Entry, ThumbnailSpan};
pub use error::CorruptError;
pub use file_type::FileType;
