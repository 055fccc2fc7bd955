use std::fs;
use std::path::Path;

use content_core::{ConfigError, RepositoryConfig};
use tempfile::tempdir;

#[test]
fn defaults_are_explicit() {
    let config = RepositoryConfig::new("/srv/site/posts");

    assert_eq!(config.content_dir, Path::new("/srv/site/posts"));
    assert_eq!(config.extension, "md");
    assert_eq!(config.excerpt_words, 40);
    assert!(config.validate().is_ok());
}

#[test]
fn base_dir_resolves_content_posts() {
    let config = RepositoryConfig::from_base_dir(Path::new("/srv/site"));
    assert_eq!(config.content_dir, Path::new("/srv/site/content/posts"));
}

#[test]
fn json_file_fills_defaults_and_resolves_relative_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, r#"{ "content_dir": "posts" }"#).unwrap();

    let config = RepositoryConfig::from_json_file(&path).unwrap();

    assert_eq!(config.content_dir, dir.path().join("posts"));
    assert_eq!(config.extension, "md");
    assert_eq!(config.excerpt_words, 40);
}

#[test]
fn json_file_keeps_absolute_dir_and_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(
        &path,
        r#"{ "content_dir": "/var/lib/posts", "extension": "markdown", "excerpt_words": 25 }"#,
    )
    .unwrap();

    let config = RepositoryConfig::from_json_file(&path).unwrap();

    assert_eq!(config.content_dir, Path::new("/var/lib/posts"));
    assert_eq!(config.extension, "markdown");
    assert_eq!(config.excerpt_words, 25);
}

#[test]
fn config_roundtrips_through_json() {
    let config = RepositoryConfig::new("/srv/posts");
    let json = serde_json::to_string(&config).unwrap();
    let back: RepositoryConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back, config);
}

#[test]
fn zero_excerpt_words_is_invalid() {
    let mut config = RepositoryConfig::new("/srv/posts");
    config.excerpt_words = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn dotted_or_empty_extension_is_invalid() {
    for extension in ["", ".md"] {
        let mut config = RepositoryConfig::new("/srv/posts");
        config.extension = extension.into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        RepositoryConfig::from_json_file(&path),
        Err(ConfigError::Serialization(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();

    assert!(matches!(
        RepositoryConfig::from_json_file(&dir.path().join("absent.json")),
        Err(ConfigError::Io { .. })
    ));
}
