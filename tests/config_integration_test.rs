use medconnect_tags::adapters::endpoint::handle_request;
use medconnect_tags::utils::validation::Validate;
use medconnect_tags::{TagSuggestion, TomlConfig};
use tempfile::TempDir;

const LONG_TEXT: &str = "We are seeing more and more people with persistent tinnitus and vertigo after viral illness, and hearing loss that does not recover.";

/// 自訂分類表取代內建分類表
#[test]
fn test_custom_taxonomy_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("taxonomy.toml");

    let config_content = r#"
blacklist = ["Audiology"]

[classifier]
max_suggestions = 2

[[keywords]]
term = "Otolaryngology"
weight = 10
related = ["tinnitus", "vertigo", "hearing loss", "sinusitis"]

[[keywords]]
term = "Audiology"
weight = 10
related = ["tinnitus", "hearing loss", "hearing aid"]
"#;
    std::fs::write(&config_path, config_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert!(config.validate().is_ok());

    let classifier = config.build_classifier().unwrap();
    let tags = classifier.classify_text(LONG_TEXT, "Tinnitus after infection");

    // tinnitus x2, vertigo, hearing loss: 0.70 + 4 * 0.03 = 0.82
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Otolaryngology");
    assert!((tags[0].confidence - 0.82).abs() < 1e-9);
}

#[test]
fn test_legacy_related_constants_fall_back_to_generic_tags() {
    let config_content = r#"
[classifier.related]
base = 0.65
per_hit = 0.02
cap = 0.80
threshold = 0.80

[[keywords]]
term = "Otolaryngology"
weight = 10
related = ["tinnitus", "vertigo", "hearing loss"]
"#;

    let classifier = TomlConfig::from_toml_str(config_content)
        .unwrap()
        .build_classifier()
        .unwrap();

    let tags = classifier.classify_text(LONG_TEXT, "Tinnitus after infection");
    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.6)]);
}

#[test]
fn test_endpoint_with_configured_classifier() {
    let config = TomlConfig::from_toml_str("blacklist = [\"Cancer\", \"Oncology\", \"Asthma\", \"Cardiology\"]").unwrap();
    let classifier = config.build_classifier().unwrap();

    let response = handle_request(
        &classifier,
        serde_json::json!({
            "content": "What are the latest protocols for managing atrial fibrillation in elderly cardiac patients with comorbid arrhythmia and cardiovascular risk?",
            "title": "AFib management question",
            "existingTags": [],
            "selectedTags": ["Cardiology"]
        }),
    );

    assert!(response.success);
    let tags = response.tags.unwrap();
    assert!(tags.iter().all(|t| t.name != "Cardiology"));
    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.8)]);
}

#[test]
fn test_blacklisting_fallback_tag_is_a_config_error() {
    let config = TomlConfig::from_toml_str("blacklist = [\"Clinical\"]").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Clinical"));
}
