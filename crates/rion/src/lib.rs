//! Convert League of Legends RST string tables to and from editable JSON.
//!
//! Decoding names every entry through a [`hashes::HashTable`] when the hash is known, encoding
//! accepts either names or raw hex hashes as keys. See [`transcode`] for the conversion rules.

pub mod commands;
pub mod document;
pub mod error;
pub mod hashes;
pub mod output;
pub mod sniff;
pub mod transcode;
pub mod version;
