use super::{RegistryError, SectionRegistry, STANDARD_SECTIONS};
use crate::section::SectionId;

#[test]
fn test_standard_registry_order_and_labels() {
    let registry = SectionRegistry::standard();

    let ids: Vec<&str> = registry.iter().map(|s| s.identifier.as_str()).collect();
    assert_eq!(ids, STANDARD_SECTIONS);

    let labels: Vec<&str> = registry.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Home", "About", "Skills", "Projects", "Blog", "Contact"]
    );

    for (i, section) in registry.iter().enumerate() {
        assert_eq!(section.order, i, "order should follow document order");
    }
}

#[test]
fn test_duplicate_identifier_rejected() {
    let result = SectionRegistry::new([
        ("home", "Home"),
        ("about", "About"),
        ("home", "Again"),
    ]);

    assert_eq!(
        result.unwrap_err(),
        RegistryError::Duplicate(SectionId::new("home"))
    );
}

#[test]
fn test_empty_registry_rejected() {
    let result = SectionRegistry::new(Vec::<(&str, &str)>::new());
    assert_eq!(result.unwrap_err(), RegistryError::Empty);
}

#[test]
fn test_lookups() {
    let registry = SectionRegistry::new([("intro", "Intro"), ("work", "Work")]).unwrap();

    assert_eq!(registry.first().identifier, "intro");
    assert_eq!(registry.position("work"), Some(1));
    assert_eq!(registry.position("missing"), None);
    assert_eq!(registry.get("work").map(|s| s.label.as_str()), Some("Work"));
    assert_eq!(registry.at(0).map(|s| s.identifier.as_str()), Some("intro"));
    assert!(registry.at(2).is_none());
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn test_duplicate_error_message_names_section() {
    let err = SectionRegistry::new([("blog", "Blog"), ("blog", "Blog")]).unwrap_err();
    assert_eq!(err.to_string(), "duplicate section identifier `blog`");
}
