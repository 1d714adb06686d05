//! Conversion between [`Document`]s and [`RstFile`]s
//!
//! Encoding turns every entry key into a hash: keys that are valid hex are used as the hash
//! directly, anything else is hashed with the version's [`HashKind`]. Decoding does the reverse
//! through a [`HashTable`], falling back to the lowercase hex spelling of unknown hashes.

use indexmap::IndexMap;
use rion_rst::{compute_hash, HashKind, RstFile, Version, MAGIC};
use std::{
    borrow::Cow,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument};

use crate::{
    document::{entry_text, DecodedDocument, Document},
    error::{Error, Result},
    hashes::{parse_hex, HashTable},
    output::{derive_output_path, write_atomic, JSON_EXTENSION, RST_EXTENSION},
    version::select_version,
};

/// Hash for an entry key, `None` for an empty key.
///
/// Keys starting with `{` have every brace removed first (`{1a2b3c4d}` is `1a2b3c4d`).
pub fn entry_hash(key: &str, kind: HashKind) -> Option<u64> {
    entry_hash_with(key, |name| compute_hash(name, kind))
}

fn entry_hash_with(key: &str, hash: impl FnOnce(&str) -> u64) -> Option<u64> {
    if key.is_empty() {
        return None;
    }

    let key = if key.starts_with('{') {
        Cow::Owned(key.replace(['{', '}'], ""))
    } else {
        Cow::Borrowed(key)
    };

    Some(parse_hex(&key).unwrap_or_else(|| hash(&*key)))
}

/// Build a string table from a parsed document
pub fn encode(document: &Document, default_version: Version) -> RstFile {
    let version = select_version(document.declared_version(), default_version);
    let mut rst = RstFile::new(version);
    let kind = rst.hash_kind();

    for (key, value) in document.entries() {
        let Some(hash) = entry_hash(key, kind) else {
            debug!("skipping entry with an empty key");
            continue;
        };
        rst.add_entry(hash, entry_text(value));
    }

    if let Some(config) = document.config() {
        rst.set_config(config);
    }

    rst
}

/// Render a string table as pretty printed JSON
pub fn decode(rst: &RstFile, hashes: &HashTable) -> Result<Vec<u8>> {
    let entries = rst
        .entries()
        .iter()
        .map(|entry| {
            let name = match hashes.resolve(entry.hash) {
                Some(name) => name.to_string(),
                None => format!("{:x}", entry.hash),
            };
            (name, entry.text.as_str())
        })
        .collect::<IndexMap<_, _>>();

    let document = DecodedDocument {
        magic: MAGIC,
        version: u8::from(rst.version()).to_string(),
        config: rst.config().filter(|config| !config.is_empty()),
        entries,
    };

    serde_json::to_vec_pretty(&document).map_err(|e| Error::from(std::io::Error::from(e)))
}

/// Convert the JSON document at `input` into a RST file.
///
/// Returns the path written to, which is derived from `input` when `output` is `None`.
#[instrument(skip(default_version), fields(input = %input.display()), err)]
pub fn encode_file(
    input: &Path,
    output: Option<&Path>,
    default_version: Version,
) -> Result<PathBuf> {
    let output = match output {
        Some(output) => output.to_path_buf(),
        None => derive_output_path(input, RST_EXTENSION)?,
    };

    let data = std::fs::read(input)?;
    let document = Document::from_slice(&data).map_err(|source| Error::MalformedDocument {
        path: input.to_path_buf(),
        source,
    })?;

    let rst = encode(&document, default_version);
    let bytes = rst.to_bytes()?;

    info!("output: {}", output.display());
    write_atomic(&output, &bytes)?;

    Ok(output)
}

/// Convert the RST file at `input` into a JSON document.
///
/// Returns the path written to, which is derived from `input` when `output` is `None`.
#[instrument(skip(hashes), fields(input = %input.display()), err)]
pub fn decode_file(input: &Path, output: Option<&Path>, hashes: &HashTable) -> Result<PathBuf> {
    let output = match output {
        Some(output) => output.to_path_buf(),
        None => derive_output_path(input, JSON_EXTENSION)?,
    };

    let rst = RstFile::read(BufReader::new(File::open(input)?))?;
    let bytes = decode(&rst, hashes)?;

    info!("output: {}", output.display());
    write_atomic(&output, &bytes)?;

    Ok(output)
}
