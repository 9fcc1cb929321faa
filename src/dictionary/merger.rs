//! Merges every dictionary in a directory into one mapping.

use std::collections::BTreeSet;
use std::path::Path;

use globset::Glob;
use ignore::WalkBuilder;

use crate::dictionary::{
    self,
    Dictionary,
    DictionaryError,
};

/// File suffix marking a dictionary definition file.
const DEFINITION_SUFFIX: &str = ".definition.json";

/// Restricts which dictionary names take part in a merge.
#[derive(Debug, Clone, Default)]
pub enum NameFilter {
    /// Every discovered dictionary.
    #[default]
    All,
    /// Only the named dictionaries.
    Include(BTreeSet<String>),
    /// Every dictionary except the named ones.
    Exclude(BTreeSet<String>),
}

/// Merges all dictionaries found in `dir` into one [`Dictionary`].
///
/// Candidate names come from the definition files in `dir`
/// (non-recursive). Each surviving name is loaded under the namespace
/// `{module or name}:{name}`, which keeps distinct dictionaries from
/// colliding in the merged mapping. Dictionaries merge in ascending
/// name order; on key collision later entries overwrite earlier ones.
///
/// Names requested via [`NameFilter::Include`] but not present in the
/// directory are reported at debug level, not treated as errors.
///
/// # Errors
/// - The directory yields no dictionary after filtering
/// - Any selected dictionary fails to load
pub fn merge_directory(
    dir: &Path,
    module: Option<&str>,
    filter: &NameFilter,
) -> Result<Dictionary, DictionaryError> {
    let mut names = discover_names(dir)?;

    match filter {
        NameFilter::All => {}
        NameFilter::Include(wanted) => {
            for missing in wanted.difference(&names) {
                tracing::debug!(name = %missing, "Included dictionary not found");
            }
            names.retain(|name| wanted.contains(name));
        }
        NameFilter::Exclude(excluded) => {
            names.retain(|name| !excluded.contains(name));
        }
    }

    if names.is_empty() {
        return Err(DictionaryError::NoDictionaries { path: dir.to_path_buf() });
    }

    let mut merged = Dictionary::new();
    for name in &names {
        let namespace = format!("{}:{name}", module.unwrap_or(name));
        let loaded = dictionary::load(dir, name, Some(&namespace))?;
        merged.absorb(loaded);
    }

    tracing::debug!(
        path = %dir.display(),
        dictionaries = names.len(),
        entries = merged.len(),
        "Merged dictionaries"
    );
    Ok(merged)
}

/// Scans `dir` for definition files and extracts the dictionary names.
fn discover_names(dir: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    let matcher = Glob::new(&format!("*{DEFINITION_SUFFIX}"))
        .map_err(|e| DictionaryError::Scan {
            path: dir.to_path_buf(),
            message: format!("invalid discovery pattern: {e}"),
        })?
        .compile_matcher();

    let mut names = BTreeSet::new();
    for result in WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }

        if !matcher.is_match(entry.file_name()) {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if let Some(name) = file_name.strip_suffix(DEFINITION_SUFFIX) {
            names.insert(name.to_string());
        }
    }

    Ok(names)
}
