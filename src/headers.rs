//! Catalog header configuration.
//!
//! Header state is an explicit immutable record handed to the catalog
//! writer; overrides from the command line are applied field by field
//! against a fixed set of recognized names.

use thiserror::Error;

/// Errors raised while parsing `--header key=value` overrides.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The override did not have the form `key=value`.
    #[error("Invalid header override '{0}': expected key=value")]
    Malformed(String),

    /// The key is not one of the recognized header fields.
    #[error("Unrecognized header field '{0}'")]
    UnknownField(String),
}

/// Header fields applied to every written catalog.
///
/// The defaults are the conventional gettext placeholders, so a fresh
/// catalog looks like one produced by `msginit` before editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Free-form comment block; accepted for compatibility but not
    /// emitted (the PO backend does not model a catalog-level comment).
    pub header_comment: Option<String>,
    /// Project name half of `Project-Id-Version`.
    pub project: String,
    /// Version half of `Project-Id-Version`.
    pub version: String,
    /// `Report-Msgid-Bugs-To` address.
    pub msgid_bugs_address: String,
    /// `Language-Team` contact line.
    pub language_team: String,
    /// `Last-Translator` contact line.
    pub last_translator: String,
    /// Forced `Language` value; per-catalog locale when unset.
    pub locale: Option<String>,
    /// Forced `PO-Revision-Date`; the run timestamp when unset.
    pub revision_date: Option<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            header_comment: None,
            project: "PROJECT".to_string(),
            version: "VERSION".to_string(),
            msgid_bugs_address: "EMAIL@ADDRESS".to_string(),
            language_team: "LANGUAGE <LL@li.org>".to_string(),
            last_translator: "FULL NAME <EMAIL@ADDRESS>".to_string(),
            locale: None,
            revision_date: None,
        }
    }
}

impl HeaderConfig {
    /// Builds a configuration from defaults plus `key=value` overrides.
    ///
    /// # Errors
    /// - An override lacks a `=` separator
    /// - A key is not a recognized header field
    pub fn from_overrides(overrides: &[String]) -> Result<Self, HeaderError> {
        let mut config = Self::default();
        for entry in overrides {
            let (key, value) =
                entry.split_once('=').ok_or_else(|| HeaderError::Malformed(entry.clone()))?;
            config.apply(key.trim(), value)?;
        }
        Ok(config)
    }

    /// Applies one override against the fixed set of recognized fields.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), HeaderError> {
        match key {
            "header_comment" => self.header_comment = Some(value.to_string()),
            "project" => self.project = value.to_string(),
            "version" => self.version = value.to_string(),
            "msgid_bugs_address" => self.msgid_bugs_address = value.to_string(),
            "language_team" => self.language_team = value.to_string(),
            "last_translator" => self.last_translator = value.to_string(),
            "locale" => self.locale = Some(value.to_string()),
            "revision_date" => self.revision_date = Some(value.to_string()),
            _ => return Err(HeaderError::UnknownField(key.to_string())),
        }
        Ok(())
    }
}
