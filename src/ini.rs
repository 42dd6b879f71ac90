//! Sectioned `key = value` document parser.
//!
//! Understands the usual INI dialect: `[section]` headers, `=` or `:`
//! delimiters, `;`/`#` comment lines, inline `;` comments and indented
//! continuation lines.

use std::fmt;

/// One `key = value` pair together with its section and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub section: String,
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// A parsed document, entries in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `[` without a closing `]`
    UnterminatedSection,
    /// Line is neither a section, a comment nor a `key = value` pair
    MissingDelimiter,
    /// `= value` with nothing before the delimiter
    EmptyKey,
}

/// Syntax error, reported at the first offending line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::UnterminatedSection => "unterminated section header",
            ParseErrorKind::MissingDelimiter => "expected `key = value`",
            ParseErrorKind::EmptyKey => "empty key",
        };
        write!(f, "line {}: {what}", self.line)
    }
}

impl std::error::Error for ParseError {}

const BOM: char = '\u{feff}';

/// Parse `content` into a [`Document`].
pub fn parse(content: &str) -> Result<Document, ParseError> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut doc = Document::default();
    let mut section = String::new();
    let mut prev_key: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        let start = line.trim_start();
        let indented = start.len() < line.len();

        // Skip empty lines and comments
        if start.is_empty() || start.starts_with(';') || start.starts_with('#') {
            continue;
        }

        if indented {
            if let Some(key) = &prev_key {
                doc.entries.push(Entry {
                    section: section.clone(),
                    key: key.clone(),
                    value: strip_inline_comment(start).to_string(),
                    line: line_no,
                });
                continue;
            }
        }

        if let Some(rest) = start.strip_prefix('[') {
            let Some(end) = rest.find(']') else {
                return Err(ParseError {
                    line: line_no,
                    kind: ParseErrorKind::UnterminatedSection,
                });
            };
            section = rest[..end].trim().to_string();
            prev_key = None;
            continue;
        }

        let Some(pos) = start.find(['=', ':']) else {
            return Err(ParseError {
                line: line_no,
                kind: ParseErrorKind::MissingDelimiter,
            });
        };

        let key = start[..pos].trim();
        if key.is_empty() {
            return Err(ParseError {
                line: line_no,
                kind: ParseErrorKind::EmptyKey,
            });
        }

        let value = strip_inline_comment(&start[pos + 1..]);
        doc.entries.push(Entry {
            section: section.clone(),
            key: key.to_string(),
            value: value.to_string(),
            line: line_no,
        });
        prev_key = Some(key.to_string());
    }

    Ok(doc)
}

/// Cut a trailing `; comment` (the `;` must follow whitespace) and trim.
fn strip_inline_comment(value: &str) -> &str {
    let mut prev_ws = false;
    for (i, c) in value.char_indices() {
        if c == ';' && prev_ws {
            return value[..i].trim();
        }
        prev_ws = c.is_whitespace();
    }
    value.trim()
}
