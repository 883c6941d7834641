//! pprint-style Python literal rendering
//!
//! Output layout (keys sorted, one entry per line, continuation lines
//! aligned under the opening brace):
//!
//! ```text
//! {'ACME': {'00090010': ('LO', '', 'Private Creator', ''),
//!           '00090011': ('SH', '', 'Acme Code', '')},
//!  'GEMS': {'00190010': ('DS', '', 'Gems One', '')}}
//! ```

use crate::error::Result;
use crate::types::{CreatorDictionary, PrivateAttribute, PrivateDictionaries};
use std::fmt::Write;

/// Renders the full nested mapping as a Python literal (no trailing newline)
pub fn render_literal(dictionaries: &PrivateDictionaries) -> Result<String> {
    let mut out = String::new();
    out.push('{');

    for (i, (creator, dict)) in dictionaries.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n ");
        }
        let key = quote(creator);
        write!(out, "{}: ", key)?;
        // column of the inner '{'
        let column = 1 + key.chars().count() + 2;
        render_creator(&mut out, dict, column)?;
    }

    out.push('}');
    Ok(out)
}

fn render_creator(out: &mut String, dict: &CreatorDictionary, column: usize) -> Result<()> {
    out.push('{');
    for (i, (tag, attribute)) in dict.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&" ".repeat(column + 1));
        }
        write!(out, "{}: {}", quote(tag), render_attribute(attribute))?;
    }
    out.push('}');
    Ok(())
}

/// Renders an attribute as a 4-tuple, e.g. `('LO', '', 'Name', '')`
pub fn render_attribute(attribute: &PrivateAttribute) -> String {
    let parts: Vec<String> = attribute.fields().iter().map(|f| quote(f)).collect();
    format!("({})", parts.join(", "))
}

/// Quotes a string the way Python's `repr` does
///
/// Single quotes are preferred; double quotes are used only when the text
/// contains a single quote and no double quote.
pub fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    let _ = write!(out, "\\x{:02x}", code);
                } else {
                    let _ = write!(out, "\\u{:04x}", code);
                }
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn attr(vr: &str, name: &str) -> PrivateAttribute {
        PrivateAttribute::new(vr.to_string(), String::new(), name.to_string(), String::new())
    }

    #[rstest]
    #[case("plain", "'plain'")]
    #[case("", "''")]
    #[case("it's", "\"it's\"")]
    #[case("say \"hi\"", "'say \"hi\"'")]
    #[case("both ' and \"", "'both \\' and \"'")]
    #[case("back\\slash", "'back\\\\slash'")]
    #[case("tab\there", "'tab\\there'")]
    #[case("bell\u{7}", "'bell\\x07'")]
    #[case("Ä-µ", "'Ä-µ'")]
    fn test_quote(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote(input), expected);
    }

    #[test]
    fn test_render_attribute() {
        assert_eq!(
            render_attribute(&attr("LO", "Private Creator")),
            "('LO', '', 'Private Creator', '')"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_literal(&PrivateDictionaries::new()).unwrap(), "{}");
    }

    #[test]
    fn test_render_layout() {
        let mut dicts = PrivateDictionaries::new();
        dicts.insert("GEMS", "00190010".to_string(), attr("DS", "Gems One"));
        dicts.insert("ACME", "00090011".to_string(), attr("SH", "Acme Code"));
        dicts.insert("ACME", "00090010".to_string(), attr("LO", "Private Creator"));

        let expected = "{'ACME': {'00090010': ('LO', '', 'Private Creator', ''),\n\
                        \x20         '00090011': ('SH', '', 'Acme Code', '')},\n\
                        \x20'GEMS': {'00190010': ('DS', '', 'Gems One', '')}}";
        assert_eq!(render_literal(&dicts).unwrap(), expected);
    }
}
