pub mod classifier;
pub mod policy;
pub mod taxonomy;

pub use crate::domain::model::{ClassifyRequest, ClassifyResponse, KeywordRule, TagSuggestion};
pub use crate::domain::ports::TagSuggester;
pub use crate::utils::error::Result;
