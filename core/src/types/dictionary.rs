use super::attribute::PrivateAttribute;
use dicom_core::Tag;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Attribute definitions for a single private creator, keyed by tag text
///
/// Tag keys are unique. Inserting an existing key replaces the previous
/// attribute (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CreatorDictionary {
    entries: BTreeMap<String, PrivateAttribute>,
}

impl CreatorDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, returning the one it replaced
    pub fn insert(&mut self, tag: String, attribute: PrivateAttribute) -> Option<PrivateAttribute> {
        self.entries.insert(tag, attribute)
    }

    /// Gets an attribute by its exact tag key
    pub fn get(&self, tag: &str) -> Option<&PrivateAttribute> {
        self.entries.get(tag)
    }

    /// Looks up an attribute for a numeric DICOM tag
    ///
    /// Tries the exact `GGGGEEEE` key first (upper then lower case hex),
    /// then the private block form `GGGGxxEE` where the high byte of the
    /// element is the reserved block number.
    pub fn lookup(&self, tag: Tag) -> Option<&PrivateAttribute> {
        let (group, element) = (tag.group(), tag.element());
        let candidates = [
            format!("{:04X}{:04X}", group, element),
            format!("{:04x}{:04x}", group, element),
            format!("{:04X}xx{:02X}", group, element & 0x00FF),
            format!("{:04x}xx{:02x}", group, element & 0x00FF),
        ];
        candidates.iter().find_map(|key| self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in sorted tag order
    pub fn iter(&self) -> btree_map::Iter<'_, String, PrivateAttribute> {
        self.entries.iter()
    }
}

impl FromIterator<(String, PrivateAttribute)> for CreatorDictionary {
    fn from_iter<I: IntoIterator<Item = (String, PrivateAttribute)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// All private dictionaries, keyed by private creator name
///
/// A creator's sub-dictionary is created on its first insert, so every
/// creator present holds at least one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PrivateDictionaries {
    creators: BTreeMap<String, CreatorDictionary>,
}

impl PrivateDictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute under `creator`, returning the one it replaced
    pub fn insert(
        &mut self,
        creator: &str,
        tag: String,
        attribute: PrivateAttribute,
    ) -> Option<PrivateAttribute> {
        self.creators
            .entry(creator.to_string())
            .or_default()
            .insert(tag, attribute)
    }

    /// Returns the sub-dictionary for a creator
    pub fn creator(&self, creator: &str) -> Option<&CreatorDictionary> {
        self.creators.get(creator)
    }

    /// Looks up a numeric tag within one creator's dictionary
    pub fn lookup(&self, creator: &str, tag: Tag) -> Option<&PrivateAttribute> {
        self.creator(creator).and_then(|dict| dict.lookup(tag))
    }

    /// Number of distinct creators
    pub fn creator_count(&self) -> usize {
        self.creators.len()
    }

    /// Total number of attributes across all creators
    pub fn attribute_count(&self) -> usize {
        self.creators.values().map(CreatorDictionary::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Iterates creators in sorted order
    pub fn iter(&self) -> btree_map::Iter<'_, String, CreatorDictionary> {
        self.creators.iter()
    }
}

impl FromIterator<(String, CreatorDictionary)> for PrivateDictionaries {
    fn from_iter<I: IntoIterator<Item = (String, CreatorDictionary)>>(iter: I) -> Self {
        Self {
            creators: iter.into_iter().collect(),
        }
    }
}
