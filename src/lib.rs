pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    local::LocalSuggester,
    remote::{FallbackSuggester, RemoteSuggester},
};
pub use crate::config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use crate::core::classifier::TagClassifier;
pub use crate::domain::model::{ClassifyRequest, ClassifyResponse, KeywordRule, Tag, TagSuggestion};
pub use crate::domain::ports::TagSuggester;
pub use crate::utils::error::{Result, TagError};
