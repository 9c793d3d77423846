//! Loading stylesheets from disk.

use std::fs;
use std::path::PathBuf;

use dynamic_styles::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, contents).expect("write document");
    path
}

#[test]
fn test_load_named_json() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Stylesheet.json", r#"{"Body": {"size": 15}}"#);

    let loader = StylesheetLoader::with_paths(vec![dir.path().to_path_buf()]);
    let sheet = loader.load_default().unwrap();
    assert_eq!(sheet.style("Body").unwrap().size(), 15.0);
    assert_eq!(sheet.source_path(), Some(dir.path().join("Stylesheet.json").as_path()));
}

#[test]
fn test_load_named_toml() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Reader.toml", "[Body]\nsize = 18\n\n[Footnote]\nparent = \"Body\"\nsize = 10\n");

    let loader = StylesheetLoader::with_paths(vec![dir.path().to_path_buf()]);
    let sheet = loader.load(DocumentSource::named("Reader")).unwrap();
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.style("Footnote").unwrap().root().name(), "Body");
}

#[test]
fn test_json_preferred_over_toml_and_path_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write(&first, "Theme.toml", "[Body]\nsize = 1\n");
    write(&first, "Theme.json", r#"{"Body": {"size": 2}}"#);
    write(&second, "Theme.json", r#"{"Body": {"size": 3}}"#);

    let mut loader = StylesheetLoader::with_paths(vec![first.path().to_path_buf()]);
    loader.add_search_path(second.path());
    let sheet = loader.load_named("Theme").unwrap();
    assert_eq!(sheet.style("Body").unwrap().size(), 2.0);
}

#[test]
fn test_load_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "custom.toml", "[Caption]\nsize = 12\nalignment = \"center\"\n");

    let loader = StylesheetLoader::with_paths(Vec::new());
    let sheet = loader.load(DocumentSource::path(&path)).unwrap();
    assert_eq!(sheet.style("Caption").unwrap().alignment(), Some(TextAlignment::Center));
    assert_eq!(sheet.source_path(), Some(path.as_path()));
}

#[test]
fn test_missing_named_document() {
    let dir = TempDir::new().unwrap();
    let loader = StylesheetLoader::with_paths(vec![dir.path().to_path_buf()]);

    match loader.load_default() {
        Err(Error::DocumentNotFound { name, searched }) => {
            assert_eq!(name, "Stylesheet");
            assert_eq!(searched.len(), 2);
            assert!(searched.iter().all(|p| p.starts_with(dir.path())));
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn test_missing_path() {
    let dir = TempDir::new().unwrap();
    let loader = StylesheetLoader::with_paths(Vec::new());
    let err = loader.load_path(dir.path().join("gone.json")).unwrap_err();
    assert!(matches!(err, Error::DocumentNotFound { ref name, .. } if name == "gone"));
}

#[test]
fn test_directory_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let loader = StylesheetLoader::with_paths(Vec::new());
    let err = loader.load_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err:?}");
}

#[test]
fn test_loader_options_apply() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Stylesheet.json", r#"{"Body": {"parent": "Nowhere"}}"#);

    let lenient = StylesheetLoader::with_paths(vec![dir.path().to_path_buf()]);
    assert!(lenient.load_default().is_ok());

    let strict = lenient.clone().options(LoadOptions::strict());
    let err = strict.load_default().unwrap_err();
    assert!(matches!(err, Error::UnknownParentReference { .. }));
}

#[test]
fn test_cyclical_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Stylesheet.json", r#"{"A": {"parent": "A"}}"#);

    let loader = StylesheetLoader::with_paths(vec![dir.path().to_path_buf()]);
    assert!(loader.load_default().unwrap_err().is_cycle());
}

#[test]
fn test_invalid_document_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ not json");

    let loader = StylesheetLoader::with_paths(Vec::new());
    let err = loader.load_path(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { format: DocumentFormat::Json, .. }));
}
