//! Loads one dictionary from its definition/translation file pair.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::dictionary::{
    Dictionary,
    DictionaryError,
    LanguageMap,
};

/// Raw JSON shape of a dictionary source file: message-id to
/// per-language strings.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawDictionary(BTreeMap<String, LanguageMap>);

/// Loads the dictionary `name` from `dir`.
///
/// Reads `<name>.definition.json` and `<name>.translation.json`. The
/// result holds one entry per definition message-id; for ids also
/// present in the translation file, the translation's per-language
/// entries extend and override the definition's. With a namespace,
/// every resulting id is rewritten to `{namespace}:{id}`.
///
/// # Errors
/// - Either file is missing, unreadable or not a JSON mapping
/// - Either file decodes to an empty mapping
pub fn load(
    dir: &Path,
    name: &str,
    namespace: Option<&str>,
) -> Result<Dictionary, DictionaryError> {
    let definitions = read_source(&dir.join(format!("{name}.definition.json")))?.0;
    let translations = read_source(&dir.join(format!("{name}.translation.json")))?.0;

    for id in translations.keys().filter(|id| !definitions.contains_key(*id)) {
        tracing::debug!(dictionary = %name, %id, "Translation entry has no definition; skipping");
    }

    let mut dictionary = Dictionary::new();
    for (id, mut languages) in definitions {
        if let Some(translated) = translations.get(&id) {
            // Per-language merge: translations extend the definition's
            // entries, they do not replace the whole record.
            languages.extend(translated.clone());
        }
        let id = match namespace {
            Some(namespace) => format!("{namespace}:{id}"),
            None => id,
        };
        dictionary.insert(id, languages);
    }

    tracing::debug!(dictionary = %name, entries = dictionary.len(), "Loaded dictionary");
    Ok(dictionary)
}

/// Reads and decodes one dictionary source file.
fn read_source(path: &Path) -> Result<RawDictionary, DictionaryError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| DictionaryError::Read { path: path.to_path_buf(), source })?;

    let raw: RawDictionary = serde_json::from_str(&content)
        .map_err(|source| DictionaryError::Parse { path: path.to_path_buf(), source })?;

    if raw.0.is_empty() {
        return Err(DictionaryError::Empty { path: path.to_path_buf() });
    }

    Ok(raw)
}
