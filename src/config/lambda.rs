use crate::config::toml_config::TomlConfig;
use crate::core::classifier::TagClassifier;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::env;

pub const TAXONOMY_CONFIG_VAR: &str = "TAXONOMY_CONFIG";

/// Settings of the remote classifier function, read from its environment.
#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub taxonomy_config: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            taxonomy_config: env::var(TAXONOMY_CONFIG_VAR)
                .ok()
                .filter(|path| !path.trim().is_empty()),
        }
    }

    /// Loads the TOML file when one is configured, the built-in tables otherwise.
    pub fn load_classifier(&self) -> Result<TagClassifier> {
        match &self.taxonomy_config {
            Some(path) => {
                tracing::info!("📁 Loading classifier configuration from: {}", path);
                TomlConfig::from_file(path)?.build_classifier()
            }
            None => TagClassifier::builtin(),
        }
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.taxonomy_config {
            crate::utils::validation::validate_non_empty_string(TAXONOMY_CONFIG_VAR, path)?;
        }
        self.load_classifier().map(|_| ())
    }
}
