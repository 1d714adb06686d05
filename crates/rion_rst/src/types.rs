//! Base types for structure of RST file.

use binrw::{BinRead, BinWrite};
use derive_more::derive::{Constructor, Display};

use crate::error::Error;

/// RST file header
///
/// Every RST file starts with "RST" followed by a single version byte.
/// The version is kept raw here so unknown versions can be reported, see [`Version::try_from`].
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(magic = b"RST", little)]
pub struct RstHeader {
    /// The raw version byte
    pub version: u8,
}

/// Versions of the RST format this library understands
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Version {
    /// Version 2, the only version able to carry a config
    #[display("2")]
    V2 = 2,
    /// Version 3
    #[display("3")]
    V3 = 3,
    /// Version 4, hashes shrink to 39 bits
    #[display("4")]
    V4 = 4,
    /// Version 5, drops the mode byte
    #[display("5")]
    V5 = 5,
}

impl Version {
    /// All supported versions, oldest first
    pub const ALL: [Version; 4] = [Version::V2, Version::V3, Version::V4, Version::V5];

    /// The newest version this library can write
    pub const fn latest() -> Version {
        Version::V5
    }

    /// The hash layout used by entries of this version
    pub const fn hash_kind(self) -> HashKind {
        match self {
            Version::V2 | Version::V3 => HashKind::Complex,
            Version::V4 | Version::V5 => HashKind::Simple,
        }
    }

    /// Whether the header contains the config block
    pub const fn has_config(self) -> bool {
        matches!(self, Version::V2)
    }

    /// Whether a mode byte sits between the entries and the data block
    pub const fn has_mode(self) -> bool {
        !matches!(self, Version::V5)
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Version::V2),
            3 => Ok(Version::V3),
            4 => Ok(Version::V4),
            5 => Ok(Version::V5),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }
}

impl From<Version> for u8 {
    fn from(value: Version) -> Self {
        value as u8
    }
}

/// Describes how many bits of an entry are used by the hash
///
/// The remaining high bits of the packed entry hold the text offset.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// 40 bit hashes
    Complex,
    /// 39 bit hashes
    Simple,
}

impl HashKind {
    /// Number of bits of the hash kept in the file
    pub const fn bits(self) -> u32 {
        match self {
            HashKind::Complex => 40,
            HashKind::Simple => 39,
        }
    }

    /// Mask selecting the hash bits of a packed entry
    pub const fn mask(self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    /// Exclusive upper bound for a text offset
    pub const fn offset_limit(self) -> u64 {
        1u64 << (64 - self.bits())
    }
}

/// A single `(hash, text)` record of a string table
#[derive(Constructor, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry {
    /// Hash of the entry's key
    pub hash: u64,
    /// Text of the entry
    pub text: String,
}
