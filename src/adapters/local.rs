use crate::core::classifier::TagClassifier;
use crate::domain::model::{ClassifyRequest, TagSuggestion};
use crate::domain::ports::TagSuggester;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Answers from the in-process classifier.
#[derive(Debug, Clone)]
pub struct LocalSuggester {
    classifier: Arc<TagClassifier>,
}

impl LocalSuggester {
    pub fn new(classifier: Arc<TagClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }
}

#[async_trait]
impl TagSuggester for LocalSuggester {
    async fn suggest(&self, request: &ClassifyRequest) -> Result<Vec<TagSuggestion>> {
        Ok(self.classifier.classify(request))
    }
}
