//! Lookup table from entry hashes back to readable key names
//!
//! The table is loaded from a plain text file with one record per line:
//!
//! ```text
//! 96ffd3ea8b game_title
//! 1a2b3c
//! ```
//!
//! A line without a space maps the hex token to itself.

use derive_more::derive::Deref;
use std::{
    collections::HashMap,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Default file name of the hash table, looked up next to the executable
pub const DEFAULT_HASH_TABLE: &str = "RSTHashes.txt";

/// Parse a bare hexadecimal `u64`: 1 to 16 hex digits, no sign and no `0x` prefix.
pub fn parse_hex(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(token, 16).ok()
}

/// Immutable mapping from hash to the name it was computed from
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct HashTable(HashMap<u64, String>);

impl HashTable {
    /// Load a hash table from disk.
    ///
    /// A missing file yields an empty table, names are only used to make output readable.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn load(path: impl AsRef<Path>) -> Result<HashTable> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no hash table found, hashes will be written as hex");
            return Ok(HashTable::default());
        }

        let file = std::fs::File::open(path)?;
        let table = Self::parse(BufReader::new(file), path)?;
        debug!(hashes = table.len(), "loaded hash table");

        Ok(table)
    }

    /// Parse hash table records from a reader, `origin` is only used for error reporting.
    ///
    /// The first name seen for a hash is kept, later duplicates are ignored.
    pub fn parse<R: BufRead>(reader: R, origin: &Path) -> Result<HashTable> {
        let mut table = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let mut line = line.strip_suffix('\r').unwrap_or(&line);
            if index == 0 {
                line = line.strip_prefix('\u{feff}').unwrap_or(line);
            }
            if line.is_empty() {
                continue;
            }

            let (token, name) = line.split_once(' ').unwrap_or((line, line));
            let hash = parse_hex(token).ok_or_else(|| Error::HashTable {
                path: origin.to_path_buf(),
                line: index + 1,
                token: token.to_string(),
            })?;

            table.entry(hash).or_insert_with(|| name.to_string());
        }

        Ok(HashTable(table))
    }

    /// Name for a hash, if known
    pub fn resolve(&self, hash: u64) -> Option<&str> {
        self.0.get(&hash).map(String::as_str)
    }
}

impl FromIterator<(u64, String)> for HashTable {
    fn from_iter<T: IntoIterator<Item = (u64, String)>>(iter: T) -> Self {
        let mut table = HashMap::new();
        for (hash, name) in iter {
            table.entry(hash).or_insert(name);
        }
        HashTable(table)
    }
}
