//! Per-language translation coverage statistics.

use std::collections::BTreeMap;

use crate::dictionary::{
    Dictionary,
    DictionaryError,
};

/// Translation coverage for one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    /// Message-ids carrying a translation for the language.
    pub count: usize,
    /// Share of the dictionary's message-ids, in percent.
    pub percentage: f64,
}

/// Computes per-language coverage for `dictionary`.
///
/// For each language-code appearing in any entry, counts how many
/// message-ids include that language; the percentage is measured
/// against the dictionary's total message-id count. The returned map
/// iterates in ascending lexical language order, which the text and
/// CSV outputs rely on.
///
/// # Errors
/// Fails on an empty dictionary (the denominator would be zero).
pub fn language_stats(
    dictionary: &Dictionary,
) -> Result<BTreeMap<String, Stat>, DictionaryError> {
    let total = dictionary.len();
    if total == 0 {
        return Err(DictionaryError::NoMessages);
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for (_, languages) in dictionary.iter() {
        for language in languages.keys() {
            *counts.entry(language.clone()).or_default() += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let stats = counts
        .into_iter()
        .map(|(language, count)| {
            let percentage = count as f64 / total as f64 * 100.0;
            (language, Stat { count, percentage })
        })
        .collect();
    Ok(stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::dictionary::LanguageMap;

    /// Builds a language map from literal pairs.
    fn languages(pairs: &[(&str, &str)]) -> LanguageMap {
        pairs.iter().map(|(code, text)| ((*code).to_string(), (*text).to_string())).collect()
    }

    #[rstest]
    fn stats_report_count_and_percentage_per_language() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("greeting", languages(&[("en", "Hello"), ("no", "Hei")]));
        dictionary.insert("farewell", languages(&[("en", "Bye")]));

        let stats = language_stats(&dictionary).unwrap();

        assert_that!(stats.len(), eq(2));
        assert_that!(stats.get("en"), some(eq(&Stat { count: 2, percentage: 100.0 })));
        assert_that!(stats.get("no"), some(eq(&Stat { count: 1, percentage: 50.0 })));
    }

    #[rstest]
    fn stats_iterate_in_ascending_language_order() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("greeting", languages(&[("sv", "Hej"), ("de", "Hallo"), ("no", "Hei")]));

        let stats = language_stats(&dictionary).unwrap();

        let order: Vec<String> = stats.keys().cloned().collect();
        assert_that!(order, elements_are![eq("de"), eq("no"), eq("sv")]);
    }

    #[rstest]
    #[case::one_of_three(3, 1)]
    #[case::two_of_three(3, 2)]
    #[case::all(3, 3)]
    fn stats_stay_within_bounds(#[case] total: usize, #[case] translated: usize) {
        let mut dictionary = Dictionary::new();
        for index in 0..total {
            let entry = if index < translated {
                languages(&[("en", "Text"), ("no", "Tekst")])
            } else {
                languages(&[("en", "Text")])
            };
            dictionary.insert(format!("id-{index}"), entry);
        }

        let stats = language_stats(&dictionary).unwrap();

        for stat in stats.values() {
            assert_that!(stat.count, le(total));
            assert_that!(stat.percentage, ge(0.0));
            assert_that!(stat.percentage, le(100.0));
        }
        assert_that!(stats.get("no").unwrap().count, eq(translated));
    }

    #[rstest]
    fn stats_fail_on_an_empty_dictionary() {
        let dictionary = Dictionary::new();

        let result = language_stats(&dictionary);

        assert_that!(result, err(matches_pattern!(DictionaryError::NoMessages)));
    }
}
