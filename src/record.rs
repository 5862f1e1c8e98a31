//! Output document model and serialization.
//!
//! `ExtractionRecord` is the fixed-shape merged result for one target. All
//! eight top-level keys are always present regardless of which extractors
//! failed; a failing extractor contributes its type's empty value. The
//! document is rendered as pretty JSON with 4-space indentation, to a file
//! path or to stdout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::errors::{IoResultExt, Result, SiteReconError};

/// The final merged output for one target.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRecord {
    pub target_url: String,
    pub emails: Vec<String>,
    /// May contain nulls for anchors without an href attribute.
    pub links: Vec<Option<String>>,
    pub authors: Option<String>,
    pub phones: Vec<ParsedPhone>,
    pub creation_update_info: CreationUpdateInfo,
    pub servers: Vec<String>,
    pub locations: Vec<String>,
}

impl ExtractionRecord {
    /// A complete-shaped record with every extractor field at its empty
    /// value.
    pub fn empty(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            emails: Vec::new(),
            links: Vec::new(),
            authors: None,
            phones: Vec::new(),
            creation_update_info: CreationUpdateInfo::default(),
            servers: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// Render as pretty JSON with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| SiteReconError::internal(format!("JSON serialization failed: {e}")))?;
        String::from_utf8(buf)
            .map_err(|e| SiteReconError::internal(format!("JSON output not UTF-8: {e}")))
    }

    /// Write the document to `path` (overwriting) or, if `None`, to stdout.
    pub fn write_out(&self, path: Option<&Path>) -> Result<()> {
        let json = self.to_pretty_json()?;
        match path {
            Some(path) => {
                let mut file =
                    File::create(path).with_path(path.display().to_string(), "create")?;
                file.write_all(json.as_bytes())
                    .with_path(path.display().to_string(), "write")?;
                file.write_all(b"\n")
                    .with_path(path.display().to_string(), "write")?;
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

/// Structured result of parsing a raw digit-group match against the
/// phone-number grammar; passed through to the document unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedPhone {
    pub country_code: u16,
    pub national_number: u64,
    pub is_valid: bool,
    pub e164: String,
}

/// Registration-date mapping. Absent fields are omitted, so a lookup that
/// found nothing (or failed entirely) serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreationUpdateInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateValue>,
}

impl CreationUpdateInfo {
    pub fn is_empty(&self) -> bool {
        self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.updated_date.is_none()
    }
}

/// A WHOIS backend may report a date field once or several times; the
/// document keeps a single string for one value and a sequence otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Single(String),
    Many(Vec<String>),
}

impl DateValue {
    /// `None` for no values, single for one, sequence for several.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => Some(DateValue::Single(values.remove(0))),
            _ => Some(DateValue::Many(values)),
        }
    }
}
