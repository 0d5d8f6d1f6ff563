//! Request handling for the remote classifier function.
//!
//! The body is `{ content, title, existingTags, selectedTags? }`. An event
//! that wraps it under `body`, either as an object or as a JSON string, is
//! accepted too. The response is always the plain `{ success, ... }`
//! envelope, not an HTTP gateway response.

use crate::core::classifier::TagClassifier;
use crate::domain::model::{ClassifyRequest, ClassifyResponse};
use crate::utils::error::{Result, TagError};
use serde_json::Value;

pub fn parse_request(payload: Value) -> Result<ClassifyRequest> {
    let body: Value = match payload {
        Value::Object(mut map) => match map.remove("body") {
            Some(Value::String(raw)) => serde_json::from_str(&raw)?,
            Some(object @ Value::Object(_)) => object,
            Some(other) => {
                return Err(TagError::ValidationError {
                    message: format!("Request body must be a JSON object, got {}", kind(&other)),
                })
            }
            None => Value::Object(map),
        },
        other => {
            return Err(TagError::ValidationError {
                message: format!("Request body must be a JSON object, got {}", kind(&other)),
            })
        }
    };

    Ok(serde_json::from_value(body)?)
}

pub fn handle_request(classifier: &TagClassifier, payload: Value) -> ClassifyResponse {
    match parse_request(payload) {
        Ok(request) => {
            let tags = classifier.classify(&request);
            tracing::info!("Classified request into {} tags", tags.len());
            ClassifyResponse::ok(tags)
        }
        Err(e) => {
            tracing::warn!("❌ Rejected classify request: {}", e);
            ClassifyResponse::failure(e.to_string())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TagSuggestion;
    use serde_json::json;

    fn classifier() -> TagClassifier {
        TagClassifier::builtin().unwrap()
    }

    #[test]
    fn test_handle_plain_body() {
        let response = handle_request(
            &classifier(),
            json!({"content": "test", "title": "", "existingTags": []}),
        );

        assert!(response.success);
        let tags = response.tags.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Discussion");
        assert_eq!(tags[0].confidence, 0.8);
    }

    #[test]
    fn test_handle_gateway_event_body() {
        let body = json!({
            "content": "What are the latest protocols for managing atrial fibrillation in elderly cardiac patients with comorbid arrhythmia and cardiovascular risk?",
            "title": "AFib management question",
            "existingTags": ["Cardiology"]
        });
        let response = handle_request(&classifier(), json!({"body": body.to_string()}));

        assert!(response.success);
        assert!(response.tags.unwrap().iter().any(|t| t.name == "Cardiology"));
    }

    #[test]
    fn test_handle_wrapped_object_body() {
        let response = handle_request(
            &classifier(),
            json!({"body": {"content": "test", "title": ""}}),
        );
        assert_eq!(response.tags.unwrap(), vec![TagSuggestion::new("Discussion", 0.8)]);

        let response = handle_request(&classifier(), json!({"body": 42}));
        assert!(!response.success);
        assert!(response.error.unwrap().contains("a number"));
    }

    #[test]
    fn test_selected_tags_are_trimmed() {
        let response = handle_request(
            &classifier(),
            json!({
                "content": "What are the latest protocols for managing atrial fibrillation in elderly cardiac patients with comorbid arrhythmia and cardiovascular risk?",
                "title": "AFib management question",
                "existingTags": [],
                "selectedTags": ["", "   ", "Cardiology ", "Cardiology"]
            }),
        );

        let tags = response.tags.unwrap();
        assert_eq!(tags, vec![TagSuggestion::new("Cardiology", 1.0)]);
    }

    #[test]
    fn test_malformed_body_is_reported() {
        let response = handle_request(&classifier(), json!(["not", "an", "object"]));
        assert!(!response.success);
        assert!(response.error.unwrap().contains("an array"));

        let response = handle_request(&classifier(), json!({"body": "{not json"}));
        assert!(!response.success);
        assert!(response.tags.is_none());

        let response = handle_request(&classifier(), json!({"content": 42}));
        assert!(!response.success);
    }
}
