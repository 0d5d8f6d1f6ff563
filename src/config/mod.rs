pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::ClassifyRequest;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, TagError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "medconnect-tags")]
#[command(about = "Suggest medical tags for a post")]
pub struct CliConfig {
    /// Post title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Post body
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the post body from a file
    #[arg(long)]
    pub content_file: Option<String>,

    /// Tags already chosen by the author
    #[arg(long, value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Tags that already exist in the catalog
    #[arg(long, value_delimiter = ',')]
    pub known: Vec<String>,

    /// Path to a TOML classifier configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Remote classifier endpoint; local classification is used if it fails
    #[arg(long)]
    pub remote: Option<String>,

    /// Print the response envelope as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn content(&self) -> Result<String> {
        match (&self.content, &self.content_file) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
            (None, None) => Ok(String::new()),
        }
    }

    pub fn to_request(&self) -> Result<ClassifyRequest> {
        Ok(ClassifyRequest::new(self.content()?, self.title.clone())
            .with_existing_tags(trimmed(&self.known))
            .with_selected_tags(self.selected.clone()))
    }
}

#[cfg(feature = "cli")]
fn trimmed(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(remote) = &self.remote {
            crate::utils::validation::validate_url("remote", remote)?;
        }
        if let Some(path) = &self.content_file {
            if !std::path::Path::new(path).is_file() {
                return Err(TagError::InvalidConfigValueError {
                    field: "content_file".to_string(),
                    value: path.clone(),
                    reason: "File does not exist".to_string(),
                });
            }
        }
        Ok(())
    }
}
