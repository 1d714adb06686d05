//! In-memory model of a string table

use bon::Builder;

use crate::types::{Entry, HashKind, Version};

/// A decoded or to-be-written RST string table
///
/// ```
/// use rion_rst::{RstFile, Version};
///
/// let mut rst = RstFile::builder()
///     .version(Version::V2)
///     .config("font_config")
///     .build();
///
/// rst.add_entry(0x1a2b3c, "Hello");
/// assert_eq!(rst.len(), 1);
/// ```
///
/// Equality is structural and ignores entry order: two tables are equal when they share the
/// version, the config and the same multiset of entries.
#[derive(Builder, Debug, Clone)]
pub struct RstFile {
    #[builder(default = Version::latest())]
    version: Version,
    #[builder(into)]
    config: Option<String>,
    #[builder(default)]
    entries: Vec<Entry>,
}

impl RstFile {
    /// Create an empty table of the given version
    pub fn new(version: Version) -> RstFile {
        RstFile {
            version,
            config: None,
            entries: Vec::new(),
        }
    }

    /// Version of the table
    pub fn version(&self) -> Version {
        self.version
    }

    /// Hash layout implied by the version
    pub fn hash_kind(&self) -> HashKind {
        self.version.hash_kind()
    }

    /// The config block, if any
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Replace the config block
    pub fn set_config(&mut self, config: impl Into<String>) {
        self.config = Some(config.into());
    }

    /// Append an entry
    pub fn add_entry(&mut self, hash: u64, text: impl Into<String>) {
        self.entries.push(Entry::new(hash, text.into()));
    }

    /// Entries in file order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries contained in this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this table contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted_entries(&self) -> Vec<&Entry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort();
        entries
    }
}

impl PartialEq for RstFile {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.config == other.config
            && self.len() == other.len()
            && self.sorted_entries() == other.sorted_entries()
    }
}

impl Eq for RstFile {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{RstFile, Version};

    #[test]
    fn builder_defaults() {
        let rst = RstFile::builder().build();

        assert_eq!(rst.version(), Version::latest());
        assert_eq!(rst.config(), None);
        assert!(rst.is_empty());
    }

    #[test]
    fn equality_ignores_entry_order() {
        let mut left = RstFile::new(Version::V3);
        left.add_entry(1, "one");
        left.add_entry(2, "two");

        let mut right = RstFile::new(Version::V3);
        right.add_entry(2, "two");
        right.add_entry(1, "one");

        assert_eq!(left, right);
    }

    #[test]
    fn equality_checks_version_config_and_text() {
        let mut base = RstFile::new(Version::V2);
        base.add_entry(1, "one");

        let mut other_version = RstFile::new(Version::V3);
        other_version.add_entry(1, "one");
        assert_ne!(base, other_version);

        let mut with_config = base.clone();
        with_config.set_config("cfg");
        assert_ne!(base, with_config);

        let mut other_text = RstFile::new(Version::V2);
        other_text.add_entry(1, "uno");
        assert_ne!(base, other_text);

        let mut duplicated = base.clone();
        duplicated.add_entry(1, "one");
        assert_ne!(base, duplicated);
    }
}
