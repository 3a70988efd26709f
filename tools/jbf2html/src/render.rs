//! HTML index page with embedded thumbnails.

use std::io::{Cursor, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, ImageReader};
use jbf_core::{Catalog, Entry};
use log::{info, warn};

use crate::error::JbfError;
use crate::format::{bpp_label, file_size_label, file_time_label, file_type_label};

const BASE64_LINE: usize = 72;

const STYLE: &str = "\
.object {
  border: 2px solid transparent;
  margin: 3px;
  margin-top: 5px;
  padding: 2px;
  float: left;
}
.object:hover {
  border: 2px solid #A0A0A0;
}
.object:focus-within {
  outline: 1px dotted #212121;
}
a {
  color: black;
  text-decoration: none;
}
a:focus {
  outline: none;
}
.container {
  display: block;
  width: 150px;
  height: 150px;
}
.thumbnail {
  display: block;
  margin-left: auto;
  margin-right: auto;
  position: relative;
  top: 50%;
  transform: translateY(-50%);
}
.filename {
  display: block;
  font-size: 0.7em;
  text-align: center;
  max-width: 150px;
  overflow: hidden;
  white-space: nowrap;
  text-overflow: ellipsis;
}
";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Also emit entries that carry no thumbnail bytes.
    pub include_empty_thumbnails: bool,
    /// Name placed in the "Created by" comment.
    pub generator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_empty_thumbnails: false,
            generator: "jbf2html".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenderStats {
    pub rendered: usize,
    pub skipped: usize,
}

pub fn render_html<W: Write, B: AsRef<[u8]>>(
    out: &mut W,
    catalog: &Catalog<B>,
    options: &RenderOptions,
) -> Result<RenderStats, JbfError> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<!-- Created by {} -->", escape(&options.generator))?;
    writeln!(out, "<html>\n<head>\n<title>Browse</title>\n<style>")?;
    out.write_all(STYLE.as_bytes())?;
    writeln!(out, "</style>\n</head>\n<body>\n")?;

    let mut stats = RenderStats::default();
    for (entry, thumbnail) in catalog.iter() {
        let thumbnail = thumbnail.unwrap_or_default();
        if thumbnail.is_empty() && !options.include_empty_thumbnails {
            stats.skipped += 1;
            continue;
        }
        write_entry(out, entry, thumbnail)?;
        stats.rendered += 1;
    }

    writeln!(out, "</body>\n</html>")?;
    info!(
        "rendered {} entries of {:?} ({} skipped)",
        stats.rendered,
        catalog.directory_name(),
        stats.skipped
    );
    Ok(stats)
}

fn write_entry<W: Write>(out: &mut W, entry: &Entry, thumbnail: &[u8]) -> Result<(), JbfError> {
    let name = escape(&entry.name);
    let dimensions = match thumbnail_dimensions(entry, thumbnail) {
        Some((width, height)) => format!(" width=\"{width}\" height=\"{height}\""),
        None => String::new(),
    };

    writeln!(out, "<div class=\"object\">")?;
    writeln!(out, "<a href=\"{name}\"")?;
    writeln!(out, "title=\"{name}")?;
    writeln!(
        out,
        "{} x {} x {}, {}",
        entry.width,
        entry.height,
        bpp_label(entry.bits_per_pixel),
        file_size_label(entry.file_size)
    )?;
    writeln!(out, "{}", file_type_label(entry.file_type))?;
    writeln!(out, "{}\">", file_time_label(entry.file_time))?;
    writeln!(out, "<span class=\"container\">")?;
    writeln!(
        out,
        "<img class=\"thumbnail\"{dimensions} src=\"data:image/jpeg;charset=utf-8;base64,\n{}\" />",
        encode_base64(thumbnail)
    )?;
    writeln!(out, "</span>")?;
    writeln!(out, "<span class=\"filename\">{name}</span>")?;
    writeln!(out, "</a>\n</div>\n")?;
    Ok(())
}

fn thumbnail_dimensions(entry: &Entry, thumbnail: &[u8]) -> Option<(u32, u32)> {
    if thumbnail.is_empty() {
        return None;
    }
    match ImageReader::with_format(Cursor::new(thumbnail), ImageFormat::Jpeg).into_dimensions() {
        Ok(dimensions) => Some(dimensions),
        Err(err) => {
            warn!("thumbnail of {:?} is not a readable JPEG: {}", entry.name, err);
            None
        }
    }
}

fn encode_base64(data: &[u8]) -> String {
    let encoded = STANDARD.encode(data);
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE + 1);
    // base64 output is ASCII, so byte chunks are valid UTF-8
    for line in encoded.as_bytes().chunks(BASE64_LINE) {
        wrapped.push_str(&String::from_utf8_lossy(line));
        wrapped.push('\n');
    }
    wrapped
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_is_wrapped() {
        let data = vec![0u8; 100];
        let encoded = encode_base64(&data);
        let lines = encoded.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), BASE64_LINE);
        assert_eq!(lines.concat(), STANDARD.encode(&data));
        assert!(encoded.ends_with('\n'));
    }

    #[test]
    fn empty_payload_encodes_to_nothing() {
        assert_eq!(encode_base64(&[]), "");
    }

    #[test]
    fn markup_is_escaped() {
        assert_eq!(escape("a&b <c> \"d\""), "a&amp;b &lt;c&gt; &quot;d&quot;");
        assert_eq!(escape("plain.jpg"), "plain.jpg");
    }
}
