use crate::error::Result;
use crate::types::PrivateDictionaries;

/// Renders the dictionaries as pretty-printed JSON
///
/// Shape: `{creator: {tag: {value_representation, value_multiplicity, name, is_retired}}}`
pub fn render(dictionaries: &PrivateDictionaries) -> Result<String> {
    let mut out = serde_json::to_string_pretty(dictionaries)?;
    out.push('\n');
    Ok(out)
}
