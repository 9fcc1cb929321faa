//! In-memory dictionary model shared by every subcommand.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

mod loader;
mod merger;
mod stats;

pub use loader::load;
pub use merger::{
    NameFilter,
    merge_directory,
};
pub use stats::{
    Stat,
    language_stats,
};

/// Per-language translated strings for one message-id.
pub type LanguageMap = BTreeMap<String, String>;

/// Errors raised while discovering, loading or measuring dictionaries.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A dictionary source file is missing or unreadable.
    #[error("Failed to read dictionary file {path}: {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A dictionary source file did not hold a mapping from message-id
    /// to per-language strings.
    #[error("Failed to parse dictionary file {path}: {source}")]
    Parse {
        /// The file that could not be parsed.
        path: PathBuf,
        /// The underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// A dictionary source file decoded to an empty mapping.
    #[error("Missing or empty dictionary: {path}")]
    Empty {
        /// The offending file.
        path: PathBuf,
    },

    /// No dictionary survived discovery and filtering.
    #[error("No dictionaries found in {path}")]
    NoDictionaries {
        /// The directory that was scanned.
        path: PathBuf,
    },

    /// Statistics were requested for a dictionary with no message-ids.
    #[error("Cannot compute statistics for an empty dictionary")]
    NoMessages,

    /// The dictionary directory could not be scanned.
    #[error("Failed to scan {path}: {message}")]
    Scan {
        /// The directory that was scanned.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },
}

/// A collection of message-ids with per-language translations.
///
/// Entries hold their language maps behind [`Rc`] so that
/// [`Dictionary::stringify`] can alias two keys to one underlying
/// record. Iteration order is ascending message-id order, which keeps
/// merge results, statistics and catalog output deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Message-id to shared per-language translations.
    entries: BTreeMap<String, Rc<LanguageMap>>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of message-ids, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no message-ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry, replacing any entry already stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, languages: LanguageMap) {
        self.entries.insert(id.into(), Rc::new(languages));
    }

    /// Looks up the translations for a message-id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LanguageMap> {
        self.entries.get(id).map(Rc::as_ref)
    }

    /// Iterates over entries in ascending message-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageMap)> {
        self.entries.iter().map(|(id, languages)| (id.as_str(), languages.as_ref()))
    }

    /// Every language-code appearing in any entry, in ascending order.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<String> {
        self.entries.values().flat_map(|languages| languages.keys().cloned()).collect()
    }

    /// Merges another dictionary into this one. On key collision the
    /// incoming entry wins.
    pub fn absorb(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Returns the entries whose key exactly matches one of `tags`.
    ///
    /// Requested tags absent from the dictionary are silently dropped.
    #[must_use]
    pub fn extract(&self, tags: &[String]) -> Self {
        let entries = tags
            .iter()
            .filter_map(|tag| {
                self.entries.get(tag).map(|languages| (tag.clone(), Rc::clone(languages)))
            })
            .collect();
        Self { entries }
    }

    /// Adds, for every entry with a non-empty `en` translation, an
    /// alias entry keyed by that English string.
    ///
    /// The alias shares the entry's underlying language map rather than
    /// copying it. When two message-ids carry the same English string,
    /// the later one in iteration order wins as the alias target.
    pub fn stringify(&mut self) {
        let aliases: Vec<(String, Rc<LanguageMap>)> = self
            .entries
            .values()
            .filter_map(|languages| {
                let english = languages.get("en")?;
                if english.is_empty() {
                    return None;
                }
                Some((english.clone(), Rc::clone(languages)))
            })
            .collect();

        for (alias, languages) in aliases {
            self.entries.insert(alias, languages);
        }
    }
}
