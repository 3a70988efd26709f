//! Display strings matching what the Paint Shop Pro 7 browser shows.

use jbf_core::FileType;
use time::{OffsetDateTime, UtcOffset};

const TICKS_PER_SECOND: u64 = 10_000_000;
const EPOCH_DIFFERENCE: u64 = 11_644_473_600;

pub fn file_type_label(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Raw => "Raw File Format",
        FileType::Bmp => "Windows or OS/2 Bitmap",
        FileType::Clp => "Windows Clipboard",
        FileType::Cut => "Dr. Halo",
        FileType::Dib => "OS/2 or Windows DIB",
        FileType::Emf => "Windows Enhanced Meta File",
        FileType::Eps => "Encapsulated PostScript",
        FileType::Fpx => "FlashPix",
        FileType::Gif => "CompuServe GIF",
        FileType::Iff => "Amiga Interchange Format",
        FileType::Img => "GEM Paint",
        FileType::Jpg => "JPEG - JFIF Compliant",
        FileType::Lbm => "Deluxe Paint",
        FileType::Mac => "MacPaint",
        FileType::Msp => "Microsoft Paint",
        FileType::Pbm => "Portable Bitmap",
        FileType::Pcx => "Zsoft Paintbrush",
        FileType::Pgm => "Portable Greymap",
        FileType::Pic => "PC Paint",
        FileType::Pct => "Macintosh PICT",
        FileType::Png => "Portable Network Graphics",
        FileType::Ppm => "Portable Pixelmap",
        FileType::Psd => "Photoshop 2.5",
        FileType::Psp => "Paint Shop Pro",
        FileType::Ras => "SUN Raster Images",
        FileType::Rle => "Compressed Bitmap",
        FileType::Sct => "SciTex Continuous Tone",
        FileType::Tga => "Truevision Targa",
        FileType::Tif => "Tagged Image File Format",
        FileType::Wmf => "Windows Meta File",
        FileType::Wpg => "Word Perfect",
        FileType::Rgb => "SGI Image File",
        FileType::Unknown(_) => "Unknown type",
    }
}

/// Colour count for a bit depth.
pub fn bpp_label(bits_per_pixel: u32) -> &'static str {
    match bits_per_pixel {
        1 => "2",
        4 => "16",
        8 => "256",
        24 => "16 Million",
        _ => "X bpp",
    }
}

pub fn file_size_label(bytes: u32) -> String {
    const KB: u32 = 1024;
    const MB: u32 = 1024 * 1024;
    const GB: u32 = 1024 * 1024 * 1024;

    let value = bytes as f64;
    if bytes < KB {
        format!("{bytes} bytes")
    } else if bytes < MB {
        format!("{:.1} KB", value / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", value / MB as f64)
    } else {
        format!("{:.2} GB", value / GB as f64)
    }
}

/// Seconds since the Unix epoch, `None` before 1970 or out of range.
pub fn file_time_to_unix(ticks: u64) -> Option<i64> {
    (ticks / TICKS_PER_SECOND)
        .checked_sub(EPOCH_DIFFERENCE)
        .and_then(|secs| i64::try_from(secs).ok())
}

/// `YYYY-MM-DD HH:MM:SS` in the local time zone, or UTC when the local offset
/// cannot be determined.
pub fn file_time_label(ticks: u64) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    file_time_label_at(ticks, offset)
}

pub fn file_time_label_at(ticks: u64, offset: UtcOffset) -> String {
    let Some(secs) = file_time_to_unix(ticks) else {
        return "unknown".to_string();
    };
    let Ok(utc) = OffsetDateTime::from_unix_timestamp(secs) else {
        return "unknown".to_string();
    };
    // keep clear of the year 9999 limit when shifting
    if utc.year() >= 9999 {
        return "unknown".to_string();
    }
    let time = utc.to_offset(offset);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        time.year(),
        u8::from(time.month()),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}
