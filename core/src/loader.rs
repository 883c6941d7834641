//! Loading generated dictionary modules back into memory
//!
//! Understands the subset of Python literal syntax the writer emits:
//! dicts, tuples and quoted strings (including implicit concatenation of
//! adjacent strings, which pprint uses to wrap long values).

use crate::error::{PrivateDictError, Result};
use crate::types::{CreatorDictionary, PrivateAttribute, PrivateDictionaries};
use regex::Regex;
use std::sync::OnceLock;

/// Parsed Python literal value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "string",
            Literal::Tuple(_) => "tuple",
            Literal::Dict(_) => "dict",
        }
    }
}

/// Loads a generated Python module
///
/// Skips leading comment and blank lines, reads the `name = \` assignment
/// and parses the literal that follows it.
///
/// Returns the assigned variable name together with the dictionaries.
pub fn load_module(text: &str) -> Result<(String, PrivateDictionaries)> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)[ \t]*=[ \t]*(?:\\[ \t]*\r?\n)?")
            .expect("Failed to compile regex")
    });

    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            break;
        }
        offset += line.len();
    }

    let body = &text[offset..];
    let captures = re.captures(body).ok_or_else(|| PrivateDictError::LiteralSyntax {
        offset,
        message: "expected '<name> = ' assignment".to_string(),
    })?;
    let name = captures[1].to_string();
    let literal_start = offset + captures[0].len();

    let literal = parse_value_at(text, literal_start)?;
    Ok((name, into_dictionaries(literal)?))
}

/// Parses a bare nested dict literal into dictionaries
pub fn parse_literal(text: &str) -> Result<PrivateDictionaries> {
    into_dictionaries(parse_value_at(text, 0)?)
}

/// Parses a JSON document produced by the JSON writer
#[cfg(feature = "json")]
pub fn load_json(text: &str) -> Result<PrivateDictionaries> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a single literal starting at `start`, allowing only whitespace after it
fn parse_value_at(text: &str, start: usize) -> Result<Literal> {
    let mut parser = LiteralParser { text, pos: start };
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

fn into_dictionaries(literal: Literal) -> Result<PrivateDictionaries> {
    let creators = match literal {
        Literal::Dict(creators) => creators,
        other => return Err(shape_error("top level", &other)),
    };

    creators
        .into_iter()
        .map(|(key, value)| {
            let creator = expect_str(key, "creator key")?;
            let entries = match value {
                Literal::Dict(entries) => entries,
                other => {
                    return Err(shape_error(&format!("dictionary of {:?}", creator), &other))
                }
            };
            let dict = entries
                .into_iter()
                .map(|(tag, attribute)| {
                    Ok((expect_str(tag, "tag key")?, into_attribute(attribute)?))
                })
                .collect::<Result<CreatorDictionary>>()?;
            Ok((creator, dict))
        })
        .collect()
}

fn into_attribute(literal: Literal) -> Result<PrivateAttribute> {
    let items = match literal {
        Literal::Tuple(items) => items,
        other => return Err(shape_error("attribute", &other)),
    };
    let [vr, vm, name, retired]: [Literal; 4] = items.try_into().map_err(|items: Vec<Literal>| {
        PrivateDictError::InvalidShape(format!(
            "attribute tuple has {} items, expected 4",
            items.len()
        ))
    })?;

    Ok(PrivateAttribute::new(
        expect_str(vr, "value representation")?,
        expect_str(vm, "value multiplicity")?,
        expect_str(name, "name")?,
        expect_str(retired, "retired flag")?,
    ))
}

fn expect_str(literal: Literal, what: &str) -> Result<String> {
    match literal {
        Literal::Str(s) => Ok(s),
        other => Err(shape_error(what, &other)),
    }
}

fn shape_error(what: &str, found: &Literal) -> PrivateDictError {
    PrivateDictError::InvalidShape(format!("{}: unexpected {}", what, found.kind()))
}

struct LiteralParser<'a> {
    text: &'a str,
    pos: usize,
}

impl LiteralParser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: &str) -> PrivateDictError {
        PrivateDictError::LiteralSyntax {
            offset: self.pos,
            message: message.to_string(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(&format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<Literal> {
        match self.peek() {
            Some('{') => self.parse_dict(),
            Some('(') => self.parse_tuple(),
            Some('\'') | Some('"') => self.parse_strings(),
            Some(c) => Err(self.error(&format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_dict(&mut self) -> Result<Literal> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Literal::Dict(entries));
            }
            let key = self.parse_value()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            entries.push((key, value));

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {}
                _ => return Err(self.error("expected ',' or '}' in dict")),
            }
        }
    }

    /// Parses `(a, b, ...)`; `(a)` without a comma is a parenthesized value
    fn parse_tuple(&mut self) -> Result<Literal> {
        self.expect('(')?;
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_whitespace();
            if self.peek() == Some(')') {
                self.bump();
                break;
            }
            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    saw_comma = true;
                }
                Some(')') => {}
                _ => return Err(self.error("expected ',' or ')' in tuple")),
            }
        }

        if items.len() == 1 && !saw_comma {
            Ok(items.remove(0))
        } else {
            Ok(Literal::Tuple(items))
        }
    }

    /// Parses one string, concatenating any directly adjacent string literals
    fn parse_strings(&mut self) -> Result<Literal> {
        let mut value = self.parse_string()?;
        loop {
            let before = self.pos;
            self.skip_whitespace();
            if matches!(self.peek(), Some('\'') | Some('"')) {
                value.push_str(&self.parse_string()?);
            } else {
                self.pos = before;
                return Ok(Literal::Str(value));
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let delimiter = self
            .bump()
            .ok_or_else(|| self.error("expected string"))?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == delimiter => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        match self.bump() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\n') => {}
            Some('x') => out.push(self.parse_hex_char(2)?),
            Some('u') => out.push(self.parse_hex_char(4)?),
            Some('U') => out.push(self.parse_hex_char(8)?),
            Some(c) => return Err(self.error(&format!("unsupported escape '\\{}'", c))),
            None => return Err(self.error("unterminated escape")),
        }
        Ok(())
    }

    fn parse_hex_char(&mut self, digits: usize) -> Result<char> {
        let end = self.pos + digits;
        let hex = self
            .text
            .get(self.pos..end)
            .ok_or_else(|| self.error("truncated hex escape"))?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| self.error("invalid hex escape"))?;
        let c = char::from_u32(code).ok_or_else(|| self.error("escape is not a valid character"))?;
        self.pos = end;
        Ok(c)
    }
}
