use std::path::{Path, PathBuf};

use log::{debug, info};

mod error;
pub mod format;
pub mod render;
mod source;

pub use error::{ErrorKind, JbfError};
pub use jbf_core::{Catalog, CorruptError, Entry, FileType, ThumbnailSpan};
pub use render::{RenderOptions, RenderStats, render_html};
pub use source::{ByteSource, LoadMode, OpenOptions};

/// File name the browser gives its catalog in every indexed directory.
pub const DEFAULT_CATALOG_NAME: &str = "pspbrwse.jbf";

/// A catalog that owns the file contents it was decoded from.
pub type JbfCatalog = Catalog<ByteSource>;

/// Opens and decodes the catalog at `path` with default options.
pub fn open<P: AsRef<Path>>(path: P) -> Result<JbfCatalog, JbfError> {
    open_with(path, &OpenOptions::default())
}

pub fn open_with<P: AsRef<Path>>(path: P, options: &OpenOptions) -> Result<JbfCatalog, JbfError> {
    let path = path.as_ref();
    let source = ByteSource::open(path, options.load_mode)?;
    let catalog = Catalog::parse(source)?;
    info!(
        "opened {}: {} entries from {:?}",
        path.display(),
        catalog.len(),
        catalog.directory_name()
    );
    Ok(catalog)
}

/// Releases a catalog and its buffer. Passing `None` does nothing.
pub fn close(catalog: Option<JbfCatalog>) {
    if let Some(catalog) = catalog {
        debug!("closing catalog of {:?}", catalog.directory_name());
        drop(catalog);
    }
}

/// Where to look for a catalog: `input` itself, `input/pspbrwse.jbf`, then
/// `pspbrwse.jbf` in the working directory.
pub fn candidate_paths(input: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(input) = input {
        paths.push(input.to_path_buf());
        paths.push(input.join(DEFAULT_CATALOG_NAME));
    }
    paths.push(PathBuf::from(DEFAULT_CATALOG_NAME));
    paths
}

/// Opens the first candidate that decodes. Fails with the last error seen.
pub fn open_first<I>(candidates: I, options: &OpenOptions) -> Result<(PathBuf, JbfCatalog), JbfError>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut last_error = None;
    for path in candidates {
        match open_with(&path, options) {
            Ok(catalog) => return Ok((path, catalog)),
            Err(err) => {
                debug!("{} not usable: {}", path.display(), err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| JbfError::Argument {
        path: PathBuf::from(DEFAULT_CATALOG_NAME),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no catalog candidates"),
    }))
}
