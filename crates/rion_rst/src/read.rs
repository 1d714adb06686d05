//! Types for reading RST string tables
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    file::RstFile,
    types::{Entry, RstHeader, Version},
};

/// Upper bound for preallocating the entry list of a file we have not validated yet
const MAX_PREALLOCATED_ENTRIES: usize = 1 << 16;

impl RstFile {
    /// Read a RST file and parse it's entries.
    ///
    /// ```no_run
    /// use std::io::prelude::*;
    ///
    /// fn list_entries(reader: impl Read + Seek) -> rion_rst::error::Result<()> {
    ///     let rst = rion_rst::RstFile::read(reader)?;
    ///
    ///     for entry in rst.entries() {
    ///         println!("{:x}: {}", entry.hash, entry.text);
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(reader), err)]
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<RstFile> {
        let header = RstHeader::read(&mut reader).map_err(|e| match e {
            binrw::Error::BadMagic { .. } => Error::InvalidFile,
            e => Error::from(e),
        })?;
        let version = Version::try_from(header.version)?;
        let kind = version.hash_kind();

        let config = if version.has_config() {
            Self::read_config(&mut reader)?
        } else {
            None
        };

        let count = reader.read_u32::<LittleEndian>()? as usize;
        let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATED_ENTRIES));
        for _ in 0..count {
            let packed = reader.read_u64::<LittleEndian>()?;
            records.push((packed & kind.mask(), packed >> kind.bits()));
        }

        if version.has_mode() {
            let _mode = reader.read_u8()?;
        }

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        debug!(entries = count, data = data.len(), "read string table layout");

        let entries = records
            .into_iter()
            .map(|(hash, offset)| Ok(Entry::new(hash, Self::read_text(&data, offset)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut rst = RstFile::builder()
            .version(version)
            .entries(entries)
            .build();
        if let Some(config) = config {
            rst.set_config(config);
        }

        Ok(rst)
    }

    fn read_config<R: Read>(reader: &mut R) -> Result<Option<String>> {
        if reader.read_u8()? == 0 {
            return Ok(None);
        }

        let length = reader.read_u32::<LittleEndian>()? as usize;
        let mut buffer = Vec::with_capacity(length.min(MAX_PREALLOCATED_ENTRIES));
        reader.take(length as u64).read_to_end(&mut buffer)?;
        if buffer.len() != length {
            return Err(Error::InvalidFile);
        }

        Ok(Some(String::from_utf8(buffer)?))
    }

    fn read_text(data: &[u8], offset: u64) -> Result<String> {
        let start = usize::try_from(offset).map_err(|_| Error::InvalidFile)?;
        let tail = data.get(start..).ok_or(Error::InvalidFile)?;
        let end = tail
            .iter()
            .position(|b| *b == b'\0')
            .ok_or(Error::InvalidFile)?;

        Ok(String::from_utf8(tail[..end].to_vec())?)
    }
}
