//! Locale document model.
//!
//! A document is an ordered set of plain `key = "value"` entries, one nested
//! `[ALERTS]` table holding string values, and optional `[info]` metadata.
//! Computed parent files carry `info.merged = true`.

use std::{fs, io, path::Path, str::FromStr};

use indexmap::IndexMap;
use toml::{Table, Value};

use super::error::{DocumentError, ParseError};

/// Reserved key of the nested alerts table.
pub const ALERTS_KEY: &str = "ALERTS";

/// Reserved key of the metadata table.
pub const INFO_KEY: &str = "info";

const MERGED_KEY: &str = "merged";

/// Ordered key-value mapping used for both plain entries and alerts.
pub type Section = IndexMap<String, String>;

/// Metadata stored under `[info]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    /// True when the document is a computed parent of two variants.
    pub merged: bool,
    /// Any other metadata keys, preserved as found.
    pub extra: Table,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub entries: Section,
    pub alerts: Section,
    pub info: Option<DocumentInfo>,
}

impl Document {
    /// Load a document from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse::<Self>().map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a document, treating a missing file as an empty document.
    pub fn load_or_default(path: &Path) -> Result<Self, DocumentError> {
        match Self::load(path) {
            Err(DocumentError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Write the document, creating missing parent directories.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = self.to_toml_string()?;
        let write_error = |source: io::Error| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)
    }

    /// Serialize as TOML: plain entries first, then `[info]`, then `[ALERTS]`.
    ///
    /// Entry and alert values are always single-line basic strings, so every
    /// assignment occupies exactly one line.
    pub fn to_toml_string(&self) -> Result<String, DocumentError> {
        let mut out = String::new();
        write_section(&mut out, &self.entries);

        if let Some(info) = &self.info {
            let mut table = Table::new();
            table.insert(MERGED_KEY.to_string(), Value::Boolean(info.merged));
            for (key, value) in &info.extra {
                table.insert(key.clone(), value.clone());
            }
            let mut root = Table::new();
            root.insert(INFO_KEY.to_string(), Value::Table(table));

            push_separator(&mut out);
            out.push_str(&toml::to_string(&root)?);
        }

        push_separator(&mut out);
        out.push('[');
        out.push_str(ALERTS_KEY);
        out.push_str("]\n");
        write_section(&mut out, &self.alerts);

        Ok(out)
    }

    /// True when `info.merged` is set.
    pub fn is_merged(&self) -> bool {
        self.info.as_ref().is_some_and(|info| info.merged)
    }

    /// Mark the document as a computed parent, keeping other metadata.
    pub fn mark_merged(&mut self) {
        self.info.get_or_insert_with(DocumentInfo::default).merged = true;
    }

    /// Look a key up among the plain entries, then among the alerts.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .or_else(|| self.alerts.get(key))
            .map(String::as_str)
    }
}

fn write_section(out: &mut String, section: &Section) {
    for (key, value) in section {
        out.push_str(&format_key(key));
        out.push_str(" = ");
        out.push_str(&basic_string(value));
        out.push('\n');
    }
}

fn push_separator(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}

fn format_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if bare { key.to_string() } else { basic_string(key) }
}

/// Quote `value` as a TOML basic string, escaping line breaks and controls.
fn basic_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let table: Table = toml::from_str(content)?;
        let mut document = Document::default();

        for (key, value) in table {
            match key.as_str() {
                ALERTS_KEY => document.alerts = string_section(&key, value)?,
                INFO_KEY => document.info = Some(parse_info(&key, value)?),
                _ => {
                    let value = expect_string(&key, value)?;
                    document.entries.insert(key, value);
                }
            }
        }

        Ok(document)
    }
}

fn string_section(key: &str, value: Value) -> Result<Section, ParseError> {
    let Value::Table(table) = value else {
        return Err(ParseError::NotATable {
            key: key.to_string(),
            found: value.type_str(),
        });
    };
    table
        .into_iter()
        .map(|(sub_key, sub_value)| {
            let sub_value = expect_string(&format!("{}.{}", key, sub_key), sub_value)?;
            Ok((sub_key, sub_value))
        })
        .collect()
}

fn parse_info(key: &str, value: Value) -> Result<DocumentInfo, ParseError> {
    let Value::Table(mut table) = value else {
        return Err(ParseError::NotATable {
            key: key.to_string(),
            found: value.type_str(),
        });
    };
    let merged = match table.remove(MERGED_KEY) {
        None => false,
        Some(Value::Boolean(merged)) => merged,
        Some(other) => {
            return Err(ParseError::NotABool {
                found: other.type_str(),
            });
        }
    };
    Ok(DocumentInfo {
        merged,
        extra: table,
    })
}

fn expect_string(key: &str, value: Value) -> Result<String, ParseError> {
    match value {
        Value::String(value) => Ok(value),
        other => Err(ParseError::NotAString {
            key: key.to_string(),
            found: other.type_str(),
        }),
    }
}
