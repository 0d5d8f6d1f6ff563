use crate::adapters::local::LocalSuggester;
use crate::config::toml_config::RemoteConfig;
use crate::domain::model::{ClassifyRequest, ClassifyResponse, TagSuggestion};
use crate::domain::ports::TagSuggester;
use crate::utils::error::{Result, TagError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;

/// Calls the remote classifier endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteSuggester {
    endpoint: String,
    client: Client,
}

impl RemoteSuggester {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TagSuggester for RemoteSuggester {
    async fn suggest(&self, request: &ClassifyRequest) -> Result<Vec<TagSuggestion>> {
        tracing::debug!("Making classify request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Remote classifier response status: {}", status);
        if !status.is_success() {
            return Err(TagError::RemoteRejectedError {
                message: format!("HTTP {}", status),
            });
        }

        let body: ClassifyResponse = response.json().await?;
        match body {
            ClassifyResponse {
                success: true,
                tags: Some(tags),
                ..
            } => Ok(tags),
            ClassifyResponse {
                success: true,
                tags: None,
                ..
            } => Err(TagError::RemoteRejectedError {
                message: "Response has no tags".to_string(),
            }),
            ClassifyResponse { error, .. } => Err(TagError::RemoteRejectedError {
                message: error.unwrap_or_else(|| "Unknown error".to_string()),
            }),
        }
    }
}

/// Tries the remote classifier first and answers locally when it fails.
///
/// Never returns an error. Remote results go through the local classifier's
/// sort, blacklist and result limit, and an empty answer is replaced by a
/// local one.
pub struct FallbackSuggester<R: TagSuggester> {
    remote: R,
    local: LocalSuggester,
}

impl<R: TagSuggester> FallbackSuggester<R> {
    pub fn new(remote: R, local: LocalSuggester) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl<R: TagSuggester> TagSuggester for FallbackSuggester<R> {
    async fn suggest(&self, request: &ClassifyRequest) -> Result<Vec<TagSuggestion>> {
        match self.remote.suggest(request).await {
            Ok(tags) => {
                let classifier = self.local.classifier();
                for tag in tags.iter().filter(|t| classifier.blacklist().contains(&t.name)) {
                    tracing::warn!("🚫 Remote classifier returned blacklisted tag: {}", tag.name);
                }

                let tags = classifier.finalize(tags);
                if tags.is_empty() {
                    tracing::warn!("⚠️ Remote classifier returned no usable tags, using local classifier");
                    return self.local.suggest(request).await;
                }
                Ok(tags)
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Remote classification failed, using local classifier: {} (Category: {:?})",
                    e,
                    e.category()
                );
                self.local.suggest(request).await
            }
        }
    }
}
