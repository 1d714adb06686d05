//! Output path derivation and atomic file writes

use std::{
    ffi::OsString,
    io::Write,
    path::{Component, Path, PathBuf},
};

use crate::error::Result;

/// Extension used when decoding a RST file to JSON
pub const JSON_EXTENSION: &str = ".json";
/// Extension used when encoding a JSON document to RST
pub const RST_EXTENSION: &str = ".stringtable";

/// Resolve `path` against the current directory and drop `.` and `..` components.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Ok(normalized)
}

/// Default output path for `input`: same directory, same stem, new `extension`.
///
/// `extension` includes its leading dot.
pub fn derive_output_path(input: &Path, extension: &str) -> Result<PathBuf> {
    let input = absolute(input)?;

    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(extension);

    Ok(match input.parent() {
        Some(directory) => directory.join(name),
        None => PathBuf::from(name),
    })
}

/// Write `data` to `path` through a temporary file in the same directory.
///
/// The destination is replaced in one rename, so readers never observe a partial file.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(directory)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
