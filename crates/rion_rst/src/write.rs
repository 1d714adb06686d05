//! Types for writing RST string tables
//!

use binrw::BinWrite;
use byteorder::{LittleEndian, WriteBytesExt};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use tracing::{instrument, warn};

use crate::error::{Error, Result};
use crate::file::RstFile;
use crate::types::RstHeader;

impl RstFile {
    /// Serialize the table into a freshly allocated buffer.
    ///
    /// Entries sharing the same text point at a single copy in the data block.
    /// Hashes are truncated to the bits of the table's [`crate::HashKind`].
    ///
    /// ```
    /// # fn doit() -> rion_rst::error::Result<()>
    /// # {
    /// use rion_rst::{RstFile, Version};
    ///
    /// let mut rst = RstFile::new(Version::V5);
    /// rst.add_entry(0xAB, "Hi");
    ///
    /// let bytes = rst.to_bytes()?;
    /// assert_eq!(&bytes[..3], b"RST");
    /// # Ok(())
    /// # }
    /// # doit().unwrap();
    /// ```
    #[instrument(skip(self), fields(version = %self.version(), entries = self.len()), err)]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let kind = self.hash_kind();
        let mut out = Cursor::new(Vec::new());

        RstHeader {
            version: self.version().into(),
        }
        .write(&mut out)?;

        if self.version().has_config() {
            match self.config() {
                Some(config) => {
                    out.write_u8(1)?;
                    out.write_u32::<LittleEndian>(u32::try_from(config.len()).map_err(
                        |_| Error::DataTooLarge {
                            field: "config",
                            size: config.len() as u64,
                        },
                    )?)?;
                    out.write_all(config.as_bytes())?;
                }
                None => out.write_u8(0)?,
            }
        } else if self.config().is_some() {
            warn!(
                "version {} cannot store a config, dropping it",
                self.version()
            );
        }

        let count = u32::try_from(self.len()).map_err(|_| Error::DataTooLarge {
            field: "entry count",
            size: self.len() as u64,
        })?;
        out.write_u32::<LittleEndian>(count)?;

        let mut data = Vec::new();
        let mut offsets: HashMap<&str, u64> = HashMap::with_capacity(self.len());
        for entry in self.entries() {
            let offset = match offsets.get(entry.text.as_str()) {
                Some(offset) => *offset,
                None => {
                    if entry.text.contains('\0') {
                        return Err(Error::InvalidText(entry.hash));
                    }

                    let offset = data.len() as u64;
                    data.extend_from_slice(entry.text.as_bytes());
                    data.push(b'\0');
                    offsets.insert(entry.text.as_str(), offset);
                    offset
                }
            };

            if offset >= kind.offset_limit() {
                return Err(Error::DataTooLarge {
                    field: "text offset",
                    size: offset,
                });
            }

            out.write_u64::<LittleEndian>((offset << kind.bits()) | (entry.hash & kind.mask()))?;
        }

        if self.version().has_mode() {
            out.write_u8(0)?;
        }

        out.write_all(&data)?;

        Ok(out.into_inner())
    }

    /// Serialize the table and write it out in a single call.
    ///
    /// Nothing reaches `writer` if serialization fails.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}
