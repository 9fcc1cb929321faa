//! End-to-end tests: dictionary sources on disk through to parsed
//! catalog output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use googletest::prelude::*;
use i18n_catalog_converter::catalog::{
    CatalogConfig,
    write_catalogs,
};
use i18n_catalog_converter::dictionary::{
    NameFilter,
    language_stats,
    load,
    merge_directory,
};
use i18n_catalog_converter::headers::HeaderConfig;
use polib::po_file;
use tempfile::TempDir;

/// Writes a dictionary file pair into `dir`.
fn write_dictionary(dir: &Path, name: &str, definition: &str, translation: &str) {
    fs::write(dir.join(format!("{name}.definition.json")), definition).unwrap();
    fs::write(dir.join(format!("{name}.translation.json")), translation).unwrap();
}

/// Configuration writing into `root` under the given domain.
fn config(root: &Path, domain: &str) -> CatalogConfig {
    CatalogConfig {
        output_root: root.to_path_buf(),
        domain: domain.to_string(),
        headers: HeaderConfig::default(),
    }
}

/// Reads the (msgid, msgstr) pairs of a written catalog.
fn read_pairs(path: &Path) -> BTreeMap<String, String> {
    let catalog = po_file::parse(path).unwrap();
    catalog
        .messages()
        .map(|message| (message.msgid().to_string(), message.msgstr().unwrap().to_string()))
        .collect()
}

#[googletest::test]
fn convert_writes_namespaced_catalogs_with_locale_remapping() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "greeting",
        r#"{"hello": {"en": "Hello"}, "bye": {"en": "Bye"}}"#,
        r#"{"hello": {"no": "Hei", "pt-br": "Olá"}}"#,
    );

    let dictionary = load(source.path(), "greeting", Some("greeting:greeting")).unwrap();
    write_catalogs(&dictionary, &config(output.path(), "messages")).unwrap();

    let english = read_pairs(&output.path().join("en/LC_MESSAGES/messages.po"));
    expect_that!(
        english.get("greeting:greeting:hello"),
        some(eq(&"Hello".to_string()))
    );
    expect_that!(english.get("greeting:greeting:bye"), some(eq(&"Bye".to_string())));
    // The compatibility remappings decide the catalog directories.
    expect_that!(output.path().join("nb/LC_MESSAGES/messages.po").exists(), eq(true));
    expect_that!(output.path().join("pt_BR/LC_MESSAGES/messages.po").exists(), eq(true));
    expect_that!(output.path().join("no").exists(), eq(false));
}

#[googletest::test]
fn merge_with_single_include_matches_convert_output() {
    let source = TempDir::new().unwrap();
    let merge_output = TempDir::new().unwrap();
    let convert_output = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "a",
        r#"{"greeting": {"en": "Hello"}}"#,
        r#"{"greeting": {"no": "Hei"}}"#,
    );
    write_dictionary(
        source.path(),
        "b",
        r#"{"farewell": {"en": "Bye"}}"#,
        r#"{"farewell": {"no": "Ha det"}}"#,
    );

    let filter = NameFilter::Include(["a".to_string()].into_iter().collect());
    let merged = merge_directory(source.path(), None, &filter).unwrap();
    write_catalogs(&merged, &config(merge_output.path(), "messages")).unwrap();

    let converted = load(source.path(), "a", Some("a:a")).unwrap();
    write_catalogs(&converted, &config(convert_output.path(), "messages")).unwrap();

    for locale in ["en", "nb"] {
        let relative = format!("{locale}/LC_MESSAGES/messages.po");
        let from_merge = read_pairs(&merge_output.path().join(&relative));
        let from_convert = read_pairs(&convert_output.path().join(&relative));
        expect_that!(from_merge, eq(from_convert));
    }
    // Dictionary "b" was filtered out entirely.
    expect_that!(
        read_pairs(&merge_output.path().join("en/LC_MESSAGES/messages.po"))
            .contains_key("b:b:farewell"),
        eq(false)
    );
}

#[googletest::test]
fn stats_over_a_directory_report_per_language_coverage() {
    let source = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "phrases",
        r#"{"greeting": {"en": "Hello", "no": "Hei"}, "farewell": {"en": "Bye"}}"#,
        r#"{"greeting": {}}"#,
    );

    let merged = merge_directory(source.path(), None, &NameFilter::All).unwrap();
    let stats = language_stats(&merged).unwrap();

    let english = stats.get("en").unwrap();
    expect_that!(english.count, eq(2));
    expect_that!(english.percentage, eq(100.0));
    let norwegian = stats.get("no").unwrap();
    expect_that!(norwegian.count, eq(1));
    expect_that!(norwegian.percentage, eq(50.0));
}

#[googletest::test]
fn stringify_aliases_reach_the_written_catalog() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "tags",
        r#"{"TAG1": {"en": "Hello"}}"#,
        r#"{"TAG1": {"no": "Hei"}}"#,
    );

    let mut dictionary = load(source.path(), "tags", Some("tags:tags")).unwrap();
    dictionary.stringify();
    write_catalogs(&dictionary, &config(output.path(), "messages")).unwrap();

    let norwegian = read_pairs(&output.path().join("nb/LC_MESSAGES/messages.po"));
    expect_that!(norwegian.get("tags:tags:TAG1"), some(eq(&"Hei".to_string())));
    expect_that!(norwegian.get("Hello"), some(eq(&"Hei".to_string())));
}

#[googletest::test]
fn extraction_into_its_own_domain_is_a_subset() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "ui",
        r#"{"ok": {"en": "OK"}, "cancel": {"en": "Cancel"}}"#,
        r#"{"ok": {"no": "OK"}}"#,
    );

    let dictionary = load(source.path(), "ui", Some("ui:ui")).unwrap();
    let extracted =
        dictionary.extract(&["ui:ui:ok".to_string(), "ui:ui:ghost".to_string()]);
    write_catalogs(&extracted, &config(output.path(), "extracted")).unwrap();

    let english = read_pairs(&output.path().join("en/LC_MESSAGES/extracted.po"));
    expect_that!(english.len(), eq(1));
    expect_that!(english.get("ui:ui:ok"), some(eq(&"OK".to_string())));
}

#[googletest::test]
fn a_second_run_updates_catalogs_in_place() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_dictionary(
        source.path(),
        "greeting",
        r#"{"hello": {"en": "Hello"}}"#,
        r#"{"hello": {}}"#,
    );
    let first = load(source.path(), "greeting", Some("greeting:greeting")).unwrap();
    write_catalogs(&first, &config(output.path(), "messages")).unwrap();

    // The dictionary gains an entry and changes an existing one.
    write_dictionary(
        source.path(),
        "greeting",
        r#"{"hello": {"en": "Hi"}, "bye": {"en": "Bye"}}"#,
        r#"{"hello": {}}"#,
    );
    let second = load(source.path(), "greeting", Some("greeting:greeting")).unwrap();
    write_catalogs(&second, &config(output.path(), "messages")).unwrap();

    let english = read_pairs(&output.path().join("en/LC_MESSAGES/messages.po"));
    expect_that!(english.get("greeting:greeting:hello"), some(eq(&"Hi".to_string())));
    expect_that!(english.get("greeting:greeting:bye"), some(eq(&"Bye".to_string())));
}
