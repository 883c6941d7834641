//! Core type definitions for private dictionary generation
//!
//! - [`RawRecord`]: One tab-separated line of the source file
//! - [`PrivateAttribute`]: Normalized `(VR, VM, name, isRetired)` entry
//! - [`CreatorDictionary`]: Tag key to attribute map for one private creator
//! - [`PrivateDictionaries`]: Creator name to [`CreatorDictionary`] map

mod attribute;
mod dictionary;
mod record;

pub use attribute::PrivateAttribute;
pub use dictionary::{CreatorDictionary, PrivateDictionaries};
pub use record::{RawRecord, FIELD_COUNT};
