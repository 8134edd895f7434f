use super::{Content, ContentError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_content_matches_page() {
    let content = Content::default();

    assert_eq!(content.profile.name, "Jane Doe");
    assert_eq!(content.skills.len(), 6);
    assert_eq!(content.skills[0].name, "JavaScript");
    assert_eq!(content.skills[0].level, 90);
    assert_eq!(content.projects.len(), 4);
    assert_eq!(content.posts.len(), 3);
    assert_eq!(content.posts[0].link, "/blog/future-of-web-development");
}

#[test]
fn test_load_from_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{
            "profile": {{ "name": "Sam Roe", "tagline": "Systems tinkerer" }},
            "skills": [{{ "name": "Rust", "level": 95 }}],
            "contact": {{ "email": "sam@example.com", "phone": "-", "location": "Oslo" }}
        }}"#
    )
    .unwrap();

    let content = Content::load(file.path()).unwrap();

    assert_eq!(content.profile.name, "Sam Roe");
    assert!(content.profile.about.is_empty());
    assert_eq!(content.skills[0].level, 95);
    assert!(content.projects.is_empty());
    assert!(content.posts.is_empty());
    assert!(content.contact.links.is_empty());
}

#[test]
fn test_load_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{ not json").unwrap();

    assert!(matches!(
        Content::load(file.path()),
        Err(ContentError::Json(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Content::load(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(ContentError::Io(_))));
}

#[test]
fn test_round_trips_through_serde() {
    let content = Content::default();
    let json = serde_json::to_string(&content).unwrap();
    let back: Content = serde_json::from_str(&json).unwrap();

    assert_eq!(back, content);
}
