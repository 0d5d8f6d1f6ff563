use serde::{Deserialize, Serialize};

/// A tag as stored by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u64>,
}

/// One entry of the keyword taxonomy. `term` is also the emitted tag name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub term: String,
    pub weight: f64,
    #[serde(default)]
    pub related: Vec<String>,
}

impl KeywordRule {
    pub fn new(term: &str, weight: f64, related: &[&str]) -> Self {
        Self {
            term: term.to_string(),
            weight,
            related: related.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub name: String,
    pub confidence: f64,
}

impl TagSuggestion {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Input of a single classification call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    /// Tag names already in use. Not used for scoring.
    #[serde(default)]
    pub existing_tags: Vec<String>,
    /// Tags the user picked by hand.
    #[serde(default)]
    pub selected_tags: Vec<String>,
}

impl ClassifyRequest {
    pub fn new(content: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_existing_tags(mut self, tags: Vec<String>) -> Self {
        self.existing_tags = tags;
        self
    }

    pub fn with_selected_tags(mut self, tags: Vec<String>) -> Self {
        self.selected_tags = tags;
        self
    }
}

/// Wire envelope returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagSuggestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyResponse {
    pub fn ok(tags: Vec<TagSuggestion>) -> Self {
        Self {
            success: true,
            tags: Some(tags),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tags: None,
            error: Some(error.into()),
        }
    }
}
