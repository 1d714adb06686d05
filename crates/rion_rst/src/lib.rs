//! This library handles reading from and creating **RST** string tables used by *League of Legends*.
//!
//! # RST Format Documentation
//!
//! The RST format is a packed binary string table. Every entry maps a 64 bit hash (of which only the
//! lower 39 or 40 bits are stored) to a UTF-8 string. The text of all entries lives in a single data
//! block at the end of the file, and identical strings may share a slot.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 3 bytes: "RST"                                             |
//! | 0x0003         | Version                | 1 byte: 2, 3, 4 or 5                                       |
//! | 0x0004         | Config                 | Version 2 only, see below                                  |
//! | ...            | Entry Count            | 4 bytes: Number of entries in the table                    |
//! | ...            | Entries                | 8 bytes per entry: packed offset and hash                  |
//! | ...            | Mode                   | 1 byte: Versions 2 to 4 only, purpose unknown              |
//! | ...            | Data                   | NUL terminated UTF-8 strings                               |
//!
//! ### Config
//!
//! Version 2 files may carry a font configuration string:
//!
//! - **Has Config**: A 1-byte flag, non-zero when a config follows.
//! - **Length**: A 4-byte unsigned integer with the size of the config in bytes.
//! - **Config**: `Length` bytes of UTF-8 text.
//!
//! ### Entries
//!
//! Each entry is a single little-endian `u64`. The low bits hold the hash and the high bits hold the
//! offset of the entry's text from the start of the data block. The split depends on the version, see
//! [`HashKind`]:
//!
//! | Version | Hash bits | Offset bits |
//! |---------|-----------|-------------|
//! | 2, 3    | 40        | 24          |
//! | 4, 5    | 39        | 25          |
//!
//! Entry hashes are computed with [`hash::compute_hash`]: the xxHash64 of the lowercased key,
//! truncated to the version's hash bits.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.stringtable`, older files use `.txt`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod file;
pub mod hash;
pub mod read;
pub mod types;
pub mod write;

pub use file::RstFile;
pub use hash::compute_hash;
pub use types::{Entry, HashKind, Version};

/// Magic string every RST file starts with
pub const MAGIC: &str = "RST";
