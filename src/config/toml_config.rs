use crate::core::classifier::TagClassifier;
use crate::core::policy::ClassifierPolicy;
use crate::core::taxonomy::{Blacklist, Taxonomy};
use crate::domain::model::KeywordRule;
use crate::utils::error::{Result, TagError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 5;

/// Classifier configuration file.
///
/// Every section is optional: a missing `[classifier]` keeps the default
/// policy, a missing `blacklist` keeps the default blacklist, and an empty
/// `[[keywords]]` list keeps the built-in taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub classifier: ClassifierPolicy,
    pub blacklist: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Vec<KeywordRule>,
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECONDS))
    }
}

impl Validate for RemoteConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("remote.endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            crate::utils::validation::validate_range("remote.timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TagError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TagError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TAG_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TagError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn taxonomy(&self) -> Result<Taxonomy> {
        if self.keywords.is_empty() {
            Taxonomy::builtin()
        } else {
            Taxonomy::new(self.keywords.clone())
        }
    }

    pub fn blacklist(&self) -> Result<Blacklist> {
        match &self.blacklist {
            Some(names) => Blacklist::new(names.clone()),
            None => Ok(Blacklist::default()),
        }
    }

    /// Builds the shared classifier. All configuration errors surface here.
    pub fn build_classifier(&self) -> Result<TagClassifier> {
        TagClassifier::new(self.taxonomy()?, self.classifier.clone(), self.blacklist()?)
    }

    pub fn remote_endpoint(&self) -> Option<&str> {
        self.remote.as_ref().map(|r| r.endpoint.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            remote.validate()?;
        }
        self.build_classifier().map(|_| ())
    }
}
