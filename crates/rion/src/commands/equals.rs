use owo_colors::{OwoColorize, Stream};
use rion_rst::RstFile;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode two RST files and compare the resulting tables.
///
/// Equality follows [`RstFile`]'s definition, so entry order does not matter.
pub fn compare_files(left: &Path, right: &Path) -> Result<bool> {
    for path in [left, right] {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
    }

    let left = RstFile::read(BufReader::new(File::open(left)?))?;
    let right = RstFile::read(BufReader::new(File::open(right)?))?;
    debug!(left = left.len(), right = right.len(), "comparing entries");

    Ok(left == right)
}

/// Reports whether two RST files hold the same table
#[derive(Debug)]
pub struct EqualsCommand {
    left: PathBuf,
    right: PathBuf,
}

impl EqualsCommand {
    /// Compare `left` against `right`
    pub fn new(left: PathBuf, right: PathBuf) -> Self {
        EqualsCommand { left, right }
    }

    pub fn left(&self) -> &Path {
        &self.left
    }

    pub fn right(&self) -> &Path {
        &self.right
    }

    /// Compare the files and print the verdict
    pub fn handle(&self) -> Result<()> {
        if compare_files(&self.left, &self.right)? {
            println!(
                "{}",
                "Files are the same.".if_supports_color(Stream::Stdout, |text| text.green())
            );
        } else {
            println!(
                "{}",
                "Files are different.".if_supports_color(Stream::Stdout, |text| text.red())
            );
        }

        Ok(())
    }
}
