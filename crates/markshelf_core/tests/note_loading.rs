use markshelf_core::{parse_manifest, scan_note_links};

#[test]
fn manifest_notes_decode_in_order_with_optional_content() {
    let json = r##"{
        "total": 2,
        "notes": [
            {"id": "intro", "title": "Introduction", "excerpt": "start here"},
            {"id": "deep", "title": "Deep Dive", "excerpt": "later", "content": "# Deep"}
        ]
    }"##;
    let manifest = parse_manifest(json).unwrap();
    assert_eq!(manifest.total, 2);

    let collection = manifest.into_collection();
    let ids: Vec<&str> = collection.iter().map(|note| note.id.as_str()).collect();
    assert_eq!(ids, ["intro", "deep"]);
    assert!(!collection.get("intro").unwrap().has_content());
    assert_eq!(
        collection.get("deep").unwrap().content.as_deref(),
        Some("# Deep")
    );
}

#[test]
fn manifest_with_missing_fields_defaults_them() {
    let manifest = parse_manifest(r#"{"notes": [{"id": "bare"}]}"#).unwrap();
    let collection = manifest.into_collection();
    let note = collection.get("bare").unwrap();
    assert!(note.title.is_empty());
    assert!(note.excerpt.is_empty());
    assert!(note.content.is_none());
}

#[test]
fn manifest_parse_failure_is_reported_as_load_error() {
    let err = parse_manifest("{broken").unwrap_err();
    assert!(err.to_string().contains("notes manifest"));
}

#[test]
fn duplicate_manifest_ids_keep_the_first_record() {
    let json = r#"{"notes": [
        {"id": "a", "title": "First"},
        {"id": "a", "title": "Second"}
    ]}"#;
    let collection = parse_manifest(json).unwrap().into_collection();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get("a").unwrap().title, "First");
}

#[test]
fn link_scan_builds_a_degraded_collection() {
    let html = concat!(
        "<nav>",
        r#"<a href="README.md">Project readme</a>"#,
        r#"<a href="getting-started.md">Getting Started</a>"#,
        r#"<a href="assets/logo.png">Logo</a>"#,
        r#"<a href="faq.md"></a>"#,
        "</nav>",
    );
    let collection = scan_note_links(html);
    let ids: Vec<&str> = collection.iter().map(|note| note.id.as_str()).collect();
    assert_eq!(ids, ["getting-started", "faq"]);
    assert_eq!(
        collection.get("getting-started").unwrap().title,
        "Getting Started"
    );
    assert_eq!(collection.get("faq").unwrap().title, "faq");
    assert!(collection
        .iter()
        .all(|note| !note.excerpt.is_empty() && note.content.is_none()));
}

#[test]
fn link_scan_of_unrelated_html_yields_an_empty_collection() {
    let collection = scan_note_links("<p>no links at all</p>");
    assert!(collection.is_empty());
}
