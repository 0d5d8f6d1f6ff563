use crate::domain::model::{ClassifyRequest, TagSuggestion};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can turn a post into ranked tag suggestions.
#[async_trait]
pub trait TagSuggester: Send + Sync {
    async fn suggest(&self, request: &ClassifyRequest) -> Result<Vec<TagSuggestion>>;
}
