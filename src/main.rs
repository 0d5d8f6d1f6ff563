use clap::Parser;
use medconnect_tags::config::toml_config::{RemoteConfig, TomlConfig};
use medconnect_tags::utils::error::ErrorSeverity;
use medconnect_tags::utils::{logger, validation::Validate};
use medconnect_tags::{
    CliConfig, ClassifyResponse, FallbackSuggester, LocalSuggester, RemoteSuggester, TagError,
    TagSuggester, TagSuggestion,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting medconnect-tags CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Classification failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), TagError> {
    config.validate()?;

    // 載入分類器配置
    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    toml_config.validate()?;

    let classifier = Arc::new(toml_config.build_classifier()?);
    let local = LocalSuggester::new(classifier);
    let request = config.to_request()?;

    // 命令列參數優先於設定檔
    let remote = config
        .remote
        .as_ref()
        .map(|endpoint| RemoteConfig::new(endpoint.clone()))
        .or_else(|| toml_config.remote.clone());

    let tags = match remote {
        Some(remote_config) => {
            tracing::info!("🌐 Using remote classifier at {}", remote_config.endpoint);
            let remote = RemoteSuggester::new(&remote_config)?;
            FallbackSuggester::new(remote, local).suggest(&request).await?
        }
        None => local.suggest(&request).await?,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&ClassifyResponse::ok(tags))?);
    } else {
        print_tags(&tags, &request.existing_tags);
    }

    Ok(())
}

fn print_tags(tags: &[TagSuggestion], known: &[String]) {
    for tag in tags {
        let marker = if !known.is_empty() && !known.contains(&tag.name) {
            "  (new tag)"
        } else {
            ""
        };
        println!("{:<24}{:.2}{}", tag.name, tag.confidence, marker);
    }
}
