use chrono::{TimeZone, Timelike, Utc};
use content_core::document::{
    make_excerpt, parse_date, DocumentError, FrontMatter, MetadataValue, ResolvedMetadata,
};
use content_core::types::{Slug, SlugError};

fn resolve(block: &str, stem: &str, body: &str) -> Result<ResolvedMetadata, DocumentError> {
    FrontMatter::parse(block, "doc.md")?.resolve(stem, body, 40, "doc.md")
}

fn words(n: usize) -> String {
    (1..=n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
}

// ------------------------------------------------------------------------
// Parsing
// ------------------------------------------------------------------------

#[test]
fn parses_known_keys() {
    let fm = FrontMatter::parse("title: Hello\nslug: hi\nimage: img/a.jpg\n", "doc.md").unwrap();

    assert_eq!(fm.title, Some(MetadataValue::String("Hello".into())));
    assert_eq!(fm.slug, Some(MetadataValue::String("hi".into())));
    assert_eq!(fm.image, Some(MetadataValue::String("img/a.jpg".into())));
    assert_eq!(fm.date, None);
    assert_eq!(fm.summary, None);
}

#[test]
fn blank_block_is_empty_schema() {
    assert_eq!(FrontMatter::parse("", "doc.md").unwrap(), FrontMatter::default());
    assert_eq!(FrontMatter::parse("  \n\n", "doc.md").unwrap(), FrontMatter::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let block = "title: A\nauthor: someone\ntags:\n  - rust\n  - web\n";
    let fm = FrontMatter::parse(block, "doc.md").unwrap();

    assert_eq!(fm.title, Some(MetadataValue::String("A".into())));
}

#[test]
fn null_counts_as_absent() {
    let fm = FrontMatter::parse("title: A\nslug: ~\n", "doc.md").unwrap();
    assert_eq!(fm.slug, None);
}

#[test]
fn non_scalar_known_field_is_invalid_metadata() {
    let result = FrontMatter::parse("title:\n  - a\n  - b\n", "doc.md");

    match result {
        Err(DocumentError::InvalidMetadata { file, .. }) => assert_eq!(file, "doc.md"),
        other => panic!("expected invalid metadata, got {other:?}"),
    }
}

#[test]
fn non_mapping_block_is_invalid_metadata() {
    let result = FrontMatter::parse("- a\n- b\n", "doc.md");
    assert!(matches!(result, Err(DocumentError::InvalidMetadata { .. })));
}

#[test]
fn yaml_syntax_error_is_invalid_metadata() {
    let result = FrontMatter::parse("title: [unclosed\n", "doc.md");
    assert!(matches!(result, Err(DocumentError::InvalidMetadata { .. })));
}

// ------------------------------------------------------------------------
// Required and defaulted fields
// ------------------------------------------------------------------------

#[test]
fn missing_title_fails() {
    let result = resolve("slug: a\n", "a", "body");

    match result {
        Err(DocumentError::MissingField { field, file }) => {
            assert_eq!(field, "title");
            assert_eq!(file, "doc.md");
        }
        other => panic!("expected missing title, got {other:?}"),
    }
}

#[test]
fn blank_title_fails() {
    let result = resolve("title: '   '\n", "a", "body");
    assert!(matches!(
        result,
        Err(DocumentError::MissingField { field: "title", .. })
    ));
}

#[test]
fn title_is_trimmed() {
    let meta = resolve("title: '  Padded  '\n", "a", "body").unwrap();
    assert_eq!(meta.title, "Padded");
}

#[test]
fn non_string_title_fails() {
    for block in ["title: 2024\n", "title: 1.50\n", "title: true\n"] {
        match resolve(block, "a", "body") {
            Err(DocumentError::MissingField { field: "title", .. }) => {}
            other => panic!("{block:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn quoted_numeric_title_is_kept_verbatim() {
    let meta = resolve("title: '1.50'\n", "a", "body").unwrap();
    assert_eq!(meta.title, "1.50");
}

#[test]
fn slug_defaults_to_file_stem() {
    let meta = resolve("title: A\n", "hello-world", "body").unwrap();
    assert_eq!(meta.slug.as_str(), "hello-world");
}

#[test]
fn blank_slug_defaults_to_file_stem() {
    let meta = resolve("title: A\nslug: ''\n", "from-stem", "body").unwrap();
    assert_eq!(meta.slug.as_str(), "from-stem");
}

#[test]
fn explicit_slug_is_normalized() {
    let meta = resolve("title: A\nslug: '  My-Post  '\n", "ignored", "body").unwrap();
    assert_eq!(meta.slug.as_str(), "my-post");
}

#[test]
fn invalid_slug_names_candidate_and_file() {
    let result = resolve("title: A\nslug: Hello_World!\n", "a", "body");

    match result {
        Err(DocumentError::InvalidSlug { slug, file }) => {
            assert_eq!(slug, "Hello_World!");
            assert_eq!(file, "doc.md");
        }
        other => panic!("expected invalid slug, got {other:?}"),
    }
}

#[test]
fn invalid_file_stem_is_an_invalid_slug() {
    let result = resolve("title: A\n", "Hello World", "body");
    assert!(matches!(
        result,
        Err(DocumentError::InvalidSlug { slug, .. }) if slug == "Hello World"
    ));
}

#[test]
fn date_defaults_to_epoch() {
    let meta = resolve("title: A\n", "a", "body").unwrap();
    assert_eq!(meta.timestamp, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn unparseable_date_fails() {
    let result = resolve("title: A\ndate: yesterday\n", "a", "body");

    match result {
        Err(DocumentError::InvalidDate { value, file }) => {
            assert_eq!(value, "yesterday");
            assert_eq!(file, "doc.md");
        }
        other => panic!("expected invalid date, got {other:?}"),
    }
}

#[test]
fn explicit_summary_is_kept_verbatim() {
    let meta = resolve("title: A\nsummary: \"Custom text\"\n", "a", &words(100)).unwrap();
    assert_eq!(meta.summary, "Custom text");
}

#[test]
fn summary_defaults_to_excerpt() {
    let meta = resolve("title: A\n", "a", "Short body here.").unwrap();
    assert_eq!(meta.summary, "Short body here");
}

#[test]
fn summary_fails_when_body_has_no_words() {
    let result = resolve("title: A\n", "a", "  \n--- ***\n");
    assert!(matches!(
        result,
        Err(DocumentError::MissingField { field: "summary", .. })
    ));
}

#[test]
fn image_is_passed_through_unmodified() {
    let meta = resolve("title: A\nimage: img/../Sample 1.JPG\n", "a", "body").unwrap();
    assert_eq!(meta.hero_image.as_deref(), Some("img/../Sample 1.JPG"));

    let meta = resolve("title: A\n", "a", "body").unwrap();
    assert_eq!(meta.hero_image, None);
}

// ------------------------------------------------------------------------
// Slugs
// ------------------------------------------------------------------------

#[test]
fn canonical_slugs_are_accepted() {
    for candidate in ["a", "abc", "a-b", "post-2024-01", "0", " Mixed-Case "] {
        assert!(Slug::normalize(candidate).is_ok(), "{candidate:?} should be accepted");
    }
    assert_eq!(Slug::normalize(" Mixed-Case ").unwrap().as_str(), "mixed-case");
}

#[test]
fn non_canonical_slugs_are_rejected() {
    for candidate in ["", "-a", "a-", "a--b", "a_b", "a b", "caf\u{e9}", "a/b"] {
        assert_eq!(
            Slug::normalize(candidate),
            Err(SlugError::NotCanonical(candidate.to_string())),
            "{candidate:?} should be rejected"
        );
    }
}

// ------------------------------------------------------------------------
// Dates
// ------------------------------------------------------------------------

#[test]
fn parses_calendar_date_as_utc_midnight() {
    let parsed = parse_date("2024-01-05", "doc.md").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
}

#[test]
fn parses_date_times_without_offset() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();

    assert_eq!(parse_date("2024-01-05T10:30", "doc.md").unwrap(), expected);
    assert_eq!(parse_date("2024-01-05T10:30:00", "doc.md").unwrap(), expected);
    assert_eq!(parse_date("2024-01-05 10:30:00", "doc.md").unwrap(), expected);
}

#[test]
fn parses_fractional_seconds() {
    let parsed = parse_date("2024-01-05T10:30:15.250", "doc.md").unwrap();

    assert_eq!(parsed.second(), 15);
    assert_eq!(parsed.timestamp_subsec_millis(), 250);
}

#[test]
fn offsets_are_converted_to_utc() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 5, 8, 30, 0).unwrap();

    assert_eq!(parse_date("2024-01-05T10:30:00+02:00", "doc.md").unwrap(), expected);
    assert_eq!(parse_date("2024-01-05T10:30:00+0200", "doc.md").unwrap(), expected);
    assert_eq!(parse_date("2024-01-05T08:30:00Z", "doc.md").unwrap(), expected);
}

#[test]
fn offsets_preserve_ordering() {
    let late_evening_west = parse_date("2024-01-05T23:00:00-02:00", "doc.md").unwrap();
    let next_midnight = parse_date("2024-01-06", "doc.md").unwrap();

    assert!(late_evening_west > next_midnight);
}

#[test]
fn malformed_dates_are_rejected() {
    let malformed = [
        "",
        "2024-13-01",
        "2024-02-30",
        "05/01/2024",
        "2024-01-05T25:00",
        "soon",
        "2024-1-5",
        "+2024-01-05",
        "2024-01-05T1:30",
        "2024-01-05T10:30:00+2",
    ];
    for value in malformed {
        match parse_date(value, "doc.md") {
            Err(DocumentError::InvalidDate { value: v, .. }) => assert_eq!(v, value),
            other => panic!("{value:?} should be rejected, got {other:?}"),
        }
    }
}

// ------------------------------------------------------------------------
// Excerpts
// ------------------------------------------------------------------------

#[test]
fn excerpt_of_exactly_limit_words_has_no_ellipsis() {
    assert_eq!(make_excerpt(&words(40), 40), words(40));
}

#[test]
fn excerpt_over_limit_is_truncated_with_ellipsis() {
    let excerpt = make_excerpt(&words(41), 40);
    assert_eq!(excerpt, format!("{}...", words(40)));
}

#[test]
fn excerpt_keeps_apostrophes_and_hyphens() {
    assert_eq!(
        make_excerpt("Don't stop: well-known things!", 40),
        "Don't stop well-known things"
    );
}

#[test]
fn excerpt_drops_markdown_punctuation_and_whitespace() {
    assert_eq!(
        make_excerpt("# Heading\n\n*bold*   text\n\n- item", 40),
        "Heading bold text item"
    );
}

#[test]
fn excerpt_of_empty_body_is_empty() {
    assert_eq!(make_excerpt("", 40), "");
    assert_eq!(make_excerpt("...", 40), "");
}

#[test]
fn excerpt_is_deterministic() {
    let body = words(75);
    assert_eq!(make_excerpt(&body, 10), make_excerpt(&body, 10));
}
