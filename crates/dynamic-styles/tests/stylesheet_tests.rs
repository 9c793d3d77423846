//! End-to-end stylesheet tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use dynamic_styles::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_base_and_bold() {
    let sheet = Stylesheet::from_json_str(
        r#"{"Base": {"size": 16, "family": "Sans"}, "Bold": {"parent": "Base", "weight": 0.8}}"#,
    )
    .expect("valid stylesheet");

    let bold = sheet.style("Bold").expect("Bold exists");
    assert_eq!(bold.family(), Some("Sans"));
    assert_eq!(bold.size(), 16.0);
    assert_eq!(bold.weight().value(), 0.8);
    assert_eq!(bold.parent().map(|p| p.name()), Some("Base"));
}

#[test]
fn test_two_style_cycle_is_rejected() {
    let result = Stylesheet::from_json_str(r#"{"A": {"parent": "B"}, "B": {"parent": "A"}}"#);
    match result {
        Err(Error::CyclicalParentGraph { style, path }) => {
            assert_eq!(style, "A");
            assert_eq!(path.first(), path.last());
        }
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

#[test]
fn test_long_cycle_is_rejected_in_every_mode() {
    let names: Vec<String> = (0..50).map(|i| format!("S{i}")).collect();
    let records = names.iter().enumerate().map(|(i, name)| {
        let parent = &names[(i + 1) % names.len()];
        (name.clone(), StyleRecord::new().with("parent", parent.as_str()))
    });
    let doc = StyleDocument::from_records(records);

    for options in [LoadOptions::lenient(), LoadOptions::strict()] {
        let err = Stylesheet::load(doc.clone(), &options).unwrap_err();
        assert!(err.is_cycle());
    }
}

#[test]
fn test_deep_chain_loads() {
    let mut doc = StyleDocument::new();
    doc.push("L0", StyleRecord::new().with("size", 11).with("alignment", "right"));
    for i in 1..500 {
        doc.push(format!("L{i}"), StyleRecord::new().with("parent", format!("L{}", i - 1)));
    }

    let sheet = Stylesheet::load(doc, &LoadOptions::strict()).unwrap();
    let leaf = sheet.style("L499").unwrap();
    assert_eq!(leaf.size(), 11.0);
    assert_eq!(leaf.alignment(), Some(TextAlignment::Right));
    assert_eq!(leaf.root().name(), "L0");
    assert_eq!(leaf.ancestors().count(), 499);
}

#[test]
fn test_long_chains_validate_quickly() {
    let len = 40_000;
    let mut doc = StyleDocument::new();
    // Declared leaf first so every walk runs into already validated styles.
    for i in (1..len).rev() {
        doc.push(format!("C{i}"), StyleRecord::new().with("parent", format!("C{}", i - 1)));
    }
    doc.push("C0", StyleRecord::new().with("alignment", "natural"));

    let start = std::time::Instant::now();
    let sheet = Stylesheet::load(doc, &LoadOptions::default()).unwrap();
    assert!(start.elapsed() < std::time::Duration::from_secs(5));

    assert_eq!(sheet.len(), len);
    assert_eq!(sheet.style("C39999").unwrap().alignment(), Some(TextAlignment::Natural));
}

#[test]
fn test_cycle_at_end_of_long_chain_is_rejected() {
    let mut doc = StyleDocument::new();
    for i in 1..20_000 {
        doc.push(format!("C{i}"), StyleRecord::new().with("parent", format!("C{}", i - 1)));
    }
    doc.push("C0", StyleRecord::new().with("parent", "C19999"));

    match Stylesheet::load(doc, &LoadOptions::default()) {
        Err(Error::CyclicalParentGraph { style, path }) => {
            assert_eq!(style, "C1");
            assert_eq!(path.len(), 20_001);
        }
        other => panic!("expected a cycle error, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn test_dynamic_scaling() {
    let doc = StyleDocument::from_json_str(
        r#"{"Scaled": {"size": 34, "shouldScale": true}, "Fixed": {"parent": "Scaled", "shouldScale": false}}"#,
    )
    .unwrap();
    let sheet = Stylesheet::load(doc, &LoadOptions::default().with_reference_size(20.0_f32)).unwrap();

    let scaled = sheet.style("Scaled").unwrap();
    assert!((scaled.scaled_size() - 40.0).abs() < 1e-4);
    assert_eq!(scaled.size(), 34.0);

    let fixed = sheet.style("Fixed").unwrap();
    assert_eq!(fixed.scaled_size(), 34.0);
}

#[test]
fn test_scaling_tracks_live_reference_size() {
    let reference = Arc::new(AtomicU32::new(17.0_f32.to_bits()));
    let provider = {
        let reference = Arc::clone(&reference);
        move || f32::from_bits(reference.load(Ordering::Relaxed))
    };

    let doc = StyleDocument::from_json_str(r#"{"Body": {"size": 17, "shouldScale": true}}"#).unwrap();
    let sheet = Stylesheet::load(doc, &LoadOptions::default().with_reference_size(provider)).unwrap();
    let body = sheet.style("Body").unwrap();

    // Resolving first must not freeze the scaled size.
    let _ = body.resolve();
    assert!((body.scaled_size() - 17.0).abs() < 1e-4);

    reference.store(34.0_f32.to_bits(), Ordering::Relaxed);
    assert!((body.scaled_size() - 34.0).abs() < 1e-4);
    assert!((body.font_descriptor().point_size - 34.0).abs() < 1e-4);
}

#[test]
fn test_roots_without_alignment_are_natural() {
    let sheet = Stylesheet::from_json_str(
        r#"{"One": {"size": 10}, "Two": {"family": "Serif"}, "Child": {"parent": "Two"}}"#,
    )
    .unwrap();

    for style in sheet.iter() {
        assert_eq!(style.alignment(), None, "{}", style.name());
    }
}

#[test]
fn test_accessors_are_idempotent() {
    let sheet = Stylesheet::from_json_str(
        r#"{"Body": {"size": 15, "lineSpacing": 2, "minimumLineHeight": 18}, "Note": {"parent": "Body", "face": "Italic"}}"#,
    )
    .unwrap();
    let note = sheet.style("Note").unwrap();

    let first = (note.size(), note.face(), note.line_spacing(), note.minimum_line_height());
    let second = (note.size(), note.face(), note.line_spacing(), note.minimum_line_height());
    assert_eq!(first, second);
    assert_eq!(sheet.resolved("Note"), sheet.resolved("Note"));
}

#[test]
fn test_resolved_style_matches_accessors() {
    let sheet = Stylesheet::from_toml_str(
        r#"
        [Body]
        family = "Sans"
        size = 15
        paragraphSpacing = 4
        alignment = "justified"

        [Quote]
        parent = "Body"
        face = "Italic"
        maximumLineHeight = 22
        "#,
    )
    .unwrap();

    let quote = sheet.style("Quote").unwrap();
    let resolved = sheet.resolved("Quote").unwrap();
    assert_eq!(resolved.family.as_deref(), quote.family());
    assert_eq!(resolved.face.as_deref(), quote.face());
    assert_eq!(resolved.size, quote.size());
    assert_eq!(resolved.paragraph_spacing, quote.paragraph_spacing());
    assert_eq!(resolved.maximum_line_height, Some(22.0));
    assert_eq!(resolved.alignment, Some(TextAlignment::Justified));

    let paragraph = quote.paragraph_style();
    assert_eq!(paragraph.line_break_mode, LineBreakMode::TruncatingTail);
}

#[test]
fn test_lenient_load_degrades_and_strict_load_fails() {
    init_tracing();
    let json = r#"{"Body": {"size": "large", "parent": "Missing", "family": "Sans"}}"#;

    let sheet = Stylesheet::from_json_str(json).unwrap();
    let body = sheet.style("Body").unwrap();
    assert_eq!(body.size(), 17.0);
    assert_eq!(body.family(), Some("Sans"));
    assert!(body.parent().is_none());

    let doc = StyleDocument::from_json_str(json).unwrap();
    let err = Stylesheet::load(doc, &LoadOptions::strict()).unwrap_err();
    assert!(matches!(err, Error::AttributeTypeMismatch { .. }));
}

#[test]
fn test_builder_and_document_agree() {
    let built = Stylesheet::from_definitions(
        [
            ("Body", StyleBuilder::new().family("Sans").size(16.0).build()),
            ("Title", StyleBuilder::new().parent("Body").weight(FontWeight::BOLD).should_scale(true).build()),
        ],
        &LoadOptions::strict(),
    )
    .unwrap();

    let decoded = Stylesheet::from_json_str(
        r#"{"Body": {"family": "Sans", "size": 16}, "Title": {"parent": "Body", "weight": 0.4, "shouldScale": true}}"#,
    )
    .unwrap();

    assert_eq!(built.resolved("Title"), decoded.resolved("Title"));
}

#[test]
fn test_sheet_is_shareable_across_threads() {
    let sheet = Arc::new(
        Stylesheet::from_json_str(r#"{"Body": {"size": 14}, "Small": {"parent": "Body", "size": 11}}"#).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sheet = Arc::clone(&sheet);
            std::thread::spawn(move || sheet.resolved("Small").map(|r| r.size))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(11.0));
    }
}
