use httpmock::prelude::*;
use medconnect_tags::config::toml_config::RemoteConfig;
use medconnect_tags::{
    ClassifyRequest, FallbackSuggester, LocalSuggester, RemoteSuggester, TagClassifier, TagError,
    TagSuggester, TagSuggestion,
};
use std::sync::Arc;

fn local() -> LocalSuggester {
    LocalSuggester::new(Arc::new(TagClassifier::builtin().unwrap()))
}

fn remote(server: &MockServer) -> RemoteSuggester {
    RemoteSuggester::new(&RemoteConfig::new(server.url("/classify"))).unwrap()
}

#[tokio::test]
async fn test_remote_suggester_sends_wire_request() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/classify").json_body(serde_json::json!({
                "content": "Post body",
                "title": "Post title",
                "existingTags": ["Cardiology"],
                "selectedTags": []
            }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "success": true,
                    "tags": [{"name": "Cardiology", "confidence": 0.85}]
                }));
        })
        .await;

    let request = ClassifyRequest::new("Post body", "Post title")
        .with_existing_tags(vec!["Cardiology".to_string()]);
    let tags = remote(&server).suggest(&request).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(tags, vec![TagSuggestion::new("Cardiology", 0.85)]);
}

#[tokio::test]
async fn test_remote_failure_envelope_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(200)
                .json_body(serde_json::json!({"success": false, "error": "model offline"}));
        })
        .await;

    let err = remote(&server)
        .suggest(&ClassifyRequest::new("body", ""))
        .await
        .unwrap_err();

    match err {
        TagError::RemoteRejectedError { message } => assert_eq!(message, "model offline"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_fallback_uses_local_classifier_on_server_error() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(500).body("internal error");
        })
        .await;

    let suggester = FallbackSuggester::new(remote(&server), local());
    let tags = suggester
        .suggest(&ClassifyRequest::new("test", ""))
        .await
        .unwrap();

    api_mock.assert_async().await;
    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.8)]);
}

#[tokio::test]
async fn test_fallback_on_unreachable_endpoint() {
    let remote = RemoteSuggester::new(&RemoteConfig {
        endpoint: "http://127.0.0.1:9/classify".to_string(),
        timeout_seconds: Some(2),
    })
    .unwrap();

    let suggester = FallbackSuggester::new(remote, local());
    let tags = suggester
        .suggest(&ClassifyRequest::default())
        .await
        .unwrap();

    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.7)]);
}

#[tokio::test]
async fn test_fallback_filters_blacklisted_remote_tags() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "tags": [
                    {"name": "Cancer", "confidence": 0.9},
                    {"name": "Cardiology", "confidence": 0.85}
                ]
            }));
        })
        .await;

    let suggester = FallbackSuggester::new(remote(&server), local());
    let tags = suggester
        .suggest(&ClassifyRequest::new("body", ""))
        .await
        .unwrap();

    assert_eq!(tags, vec![TagSuggestion::new("Cardiology", 0.85)]);
}

#[tokio::test]
async fn test_fallback_sorts_remote_tags() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "tags": [
                    {"name": "Research", "confidence": 0.5},
                    {"name": "Cardiology", "confidence": 0.9},
                    {"name": "Geriatrics", "confidence": 0.7}
                ]
            }));
        })
        .await;

    let suggester = FallbackSuggester::new(remote(&server), local());
    let tags = suggester
        .suggest(&ClassifyRequest::new("body", ""))
        .await
        .unwrap();

    assert_eq!(
        tags,
        vec![
            TagSuggestion::new("Cardiology", 0.9),
            TagSuggestion::new("Geriatrics", 0.7),
            TagSuggestion::new("Research", 0.5),
        ]
    );
}

#[tokio::test]
async fn test_fallback_answers_locally_when_remote_tags_are_all_blacklisted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "tags": [{"name": "Cancer", "confidence": 0.9}]
            }));
        })
        .await;

    let suggester = FallbackSuggester::new(remote(&server), local());
    let tags = suggester
        .suggest(&ClassifyRequest::new("test", ""))
        .await
        .unwrap();

    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.8)]);
}

#[tokio::test]
async fn test_fallback_answers_locally_when_remote_tags_are_empty() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/classify");
            then.status(200)
                .json_body(serde_json::json!({"success": true, "tags": []}));
        })
        .await;

    let suggester = FallbackSuggester::new(remote(&server), local());
    let tags = suggester
        .suggest(&ClassifyRequest::new("test", ""))
        .await
        .unwrap();

    api_mock.assert_async().await;
    assert_eq!(tags, vec![TagSuggestion::new("Discussion", 0.8)]);
}

#[test]
fn test_remote_suggester_rejects_invalid_endpoint() {
    assert!(RemoteSuggester::new(&RemoteConfig::new("not-a-url")).is_err());
}
