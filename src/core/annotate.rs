//! Append reference-language comments to assignment lines.
//!
//! Works on raw text rather than the parsed document so that every other
//! line, including existing comments and blank lines, is kept verbatim.

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

use super::{
    document::{ALERTS_KEY, Document},
    error::DocumentError,
};

const COMMENT_MARKER: char = '#';

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:"((?:[^"\\]|\\.)*)"|'([^']*)'|([A-Za-z0-9_-]+))\s*="#)
        .expect("key pattern is valid")
});

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[\s*([^\]]+?)\s*\]").expect("header pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub text: String,
    /// Number of lines that received a comment.
    pub annotated: usize,
}

/// Opening delimiter of a multi-line string still open at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenString {
    Basic,
    Literal,
}

/// Annotate every uncommented assignment whose key the template knows.
///
/// Lines inside a multi-line string, and lines opening one, are copied as is.
pub fn annotate_text(text: &str, template: &Document) -> Annotated {
    let mut out = String::with_capacity(text.len());
    let mut annotated = 0;
    let mut in_alerts = false;
    let mut open = None;

    for line in text.split_inclusive('\n') {
        let (body, eol) = split_line_ending(line);

        let was_open = open.is_some();
        open = scan_strings(body, open);
        if was_open || open.is_some() {
            out.push_str(line);
            continue;
        }

        if !body.contains('=') {
            if let Some(caps) = HEADER_RE.captures(body) {
                in_alerts = &caps[1] == ALERTS_KEY;
            }
            out.push_str(line);
            continue;
        }

        let reference = (!body.contains(COMMENT_MARKER))
            .then(|| parse_key(body))
            .flatten()
            .and_then(|key| reference_value(template, key, in_alerts));

        match reference {
            Some(value) => {
                out.push_str(body.trim_end());
                out.push_str(" # ");
                out.push_str(&escape_comment(value));
                out.push_str(eol);
                annotated += 1;
            }
            None => out.push_str(line),
        }
    }

    Annotated {
        text: out,
        annotated,
    }
}

/// Annotate the file at `path` in place, returning the number of lines changed.
pub fn annotate_file(path: &Path, template: &Document) -> Result<usize, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let result = annotate_text(&content, template);
    if result.annotated > 0 {
        fs::write(path, result.text).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    tracing::debug!("annotated {} line(s) in {}", result.annotated, path.display());
    Ok(result.annotated)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Walk the string literals of one line, starting inside `open` if set, and
/// return the multi-line string left open at its end.
fn scan_strings(line: &str, mut open: Option<OpenString>) -> Option<OpenString> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];
        match open {
            Some(OpenString::Basic) => {
                if rest[0] == b'\\' {
                    i += 2;
                } else if rest.starts_with(br#"""""#) {
                    open = None;
                    i += 3;
                } else {
                    i += 1;
                }
            }
            Some(OpenString::Literal) => {
                if rest.starts_with(b"'''") {
                    open = None;
                    i += 3;
                } else {
                    i += 1;
                }
            }
            None => match rest[0] {
                b'#' => break,
                b'"' if rest.starts_with(br#"""""#) => {
                    open = Some(OpenString::Basic);
                    i += 3;
                }
                b'\'' if rest.starts_with(b"'''") => {
                    open = Some(OpenString::Literal);
                    i += 3;
                }
                b'"' => i += 1 + basic_string_len(&rest[1..]),
                b'\'' => {
                    i += 1 + rest[1..]
                        .iter()
                        .position(|&b| b == b'\'')
                        .map_or(rest.len() - 1, |end| end + 1)
                }
                _ => i += 1,
            },
        }
    }

    open
}

/// Length of a single-line basic string body including its closing quote.
fn basic_string_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn parse_key(body: &str) -> Option<&str> {
    let caps = KEY_RE.captures(body)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

fn reference_value<'a>(template: &'a Document, key: &str, in_alerts: bool) -> Option<&'a str> {
    if in_alerts {
        template
            .alerts
            .get(key)
            .or_else(|| template.entries.get(key))
            .map(String::as_str)
    } else {
        template.lookup(key)
    }
}

/// Keep multi-line reference values on a single comment line.
fn escape_comment(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}
