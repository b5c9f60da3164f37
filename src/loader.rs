//! Reading template and parameter files

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::RenderError;

/// Read a whole UTF-8 file into a string
///
/// A missing file is reported as [`RenderError::NotFound`]; every other I/O
/// failure (permissions, invalid UTF-8, a directory) as [`RenderError::Read`].
pub fn load(path: impl AsRef<Path>) -> Result<String, RenderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RenderError::NotFound {
            path: path.to_path_buf(),
        },
        _ => RenderError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!("loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}
