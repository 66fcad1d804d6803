use anyhow::Context;
use bean_pickup::domain::ports::DocumentSource;
use bean_pickup::utils::logger;
use bean_pickup::{
    CliConfig, FileDocumentSource, HomePage, HttpDocumentSource, PageContext, PickupLoader,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting bean-pickup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Some(name) = &config.site_name {
        tracing::info!("🏪 Site: {}", name);
    }
    tracing::info!("📄 Page location: {}", config.location);

    let source = HttpDocumentSource::new();

    // 讀取首頁：本機檔案直接讀，其餘走 HTTP
    let markup = if config.location.scheme() == "file" {
        FileDocumentSource.fetch_document(&config.location).await
    } else {
        source.fetch_document(&config.location).await
    };
    let markup = match markup {
        Ok(markup) => markup,
        Err(e) => {
            tracing::error!("❌ Could not load home page {}: {}", config.location, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let mut page = HomePage::parse(&markup, PageContext::new(config.location.clone()));

    let mut loader = match PickupLoader::new(source, &config.settings) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    if let Some(seed) = cli.seed {
        loader = loader.with_seed(seed);
    }

    let outcome = loader.init_site(&mut page).await;
    tracing::info!("Pickup outcome: {:?}", outcome);

    if cli.report {
        eprintln!("{}", serde_json::to_string(&outcome)?);
    }

    let rendered = page.html();
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
