//! Assembles and persists per-language PO catalogs.

use std::path::PathBuf;

use chrono::Utc;
use polib::catalog::Catalog;
use polib::message::Message;
use polib::metadata::CatalogMetadata;
use polib::po_file;
use thiserror::Error;

use crate::catalog::locale;
use crate::dictionary::Dictionary;
use crate::headers::HeaderConfig;

/// Errors raised while assembling or persisting catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The output directory could not be created, typically because a
    /// path component exists but is not a directory.
    #[error("Cannot use {path} as an output directory: {source}")]
    OutputDir {
        /// The directory that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An existing catalog at the output path could not be parsed.
    #[error("Failed to read existing catalog {path}: {message}")]
    Read {
        /// The catalog file.
        path: PathBuf,
        /// Description of the parse failure.
        message: String,
    },

    /// A catalog could not be written.
    #[error("Failed to write catalog {path}: {source}")]
    Write {
        /// The catalog file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Where and how catalogs are written.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Root directory holding one subdirectory per locale.
    pub output_root: PathBuf,
    /// Catalog domain, i.e. the output file stem.
    pub domain: String,
    /// Header fields applied to every catalog.
    pub headers: HeaderConfig,
}

/// Writes one catalog per language present in `dictionary`.
///
/// Each catalog lands at
/// `{output_root}/{locale}/LC_MESSAGES/{domain}.po`. An existing file
/// at that path is parsed and updated in place, so translations from
/// earlier runs survive. Languages that do not resolve to a known
/// locale are skipped with a warning.
///
/// # Errors
/// - An output directory cannot be created
/// - An existing catalog cannot be parsed
/// - A catalog cannot be written
pub fn write_catalogs(
    dictionary: &Dictionary,
    config: &CatalogConfig,
) -> Result<(), CatalogError> {
    if config.headers.header_comment.is_some() {
        tracing::warn!("The PO backend does not store a catalog comment block; header_comment is ignored");
    }

    for language in dictionary.languages() {
        let Some(resolved) = locale::resolve(&language) else {
            tracing::warn!(language = %language, "Unknown language code; skipping");
            continue;
        };
        write_language(dictionary, config, &language, &resolved)?;
    }
    Ok(())
}

/// Writes the catalog for one language.
fn write_language(
    dictionary: &Dictionary,
    config: &CatalogConfig,
    language: &str,
    locale: &str,
) -> Result<(), CatalogError> {
    let dir = config.output_root.join(locale).join("LC_MESSAGES");
    std::fs::create_dir_all(&dir)
        .map_err(|source| CatalogError::OutputDir { path: dir.clone(), source })?;
    let path = dir.join(format!("{}.po", config.domain));

    let mut catalog = if path.exists() {
        po_file::parse(&path)
            .map_err(|e| CatalogError::Read { path: path.clone(), message: e.to_string() })?
    } else {
        Catalog::new(CatalogMetadata::new())
    };

    let mut written = 0_usize;
    for (id, languages) in dictionary.iter() {
        let Some(text) = languages.get(language) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let message = Message::build_singular()
            .with_msgid(id.to_string())
            .with_msgstr(text.clone())
            .done();
        catalog.append_or_update(message);
        written += 1;
    }

    apply_headers(&mut catalog.metadata, &config.headers, locale);

    tracing::debug!(path = %path.display(), language = %language, entries = written, "Writing catalog");
    po_file::write(&catalog, &path)
        .map_err(|source| CatalogError::Write { path: path.clone(), source })
}

/// Refreshes catalog metadata from the header configuration.
fn apply_headers(metadata: &mut CatalogMetadata, headers: &HeaderConfig, locale: &str) {
    let now = Utc::now().format("%Y-%m-%d %H:%M%z").to_string();

    metadata.project_id_version = format!("{} {}", headers.project, headers.version);
    metadata.report_msgid_bugs_to = headers.msgid_bugs_address.clone();
    metadata.language_team = headers.language_team.clone();
    metadata.last_translator = headers.last_translator.clone();
    metadata.language = headers.locale.clone().unwrap_or_else(|| locale.to_string());
    metadata.po_revision_date = headers.revision_date.clone().unwrap_or_else(|| now.clone());
    if metadata.pot_creation_date.is_empty() {
        metadata.pot_creation_date = now;
    }
    if metadata.mime_version.is_empty() {
        metadata.mime_version = "1.0".to_string();
    }
    if metadata.content_type.is_empty() {
        metadata.content_type = "text/plain; charset=UTF-8".to_string();
    }
    if metadata.content_transfer_encoding.is_empty() {
        metadata.content_transfer_encoding = "8bit".to_string();
    }
}
