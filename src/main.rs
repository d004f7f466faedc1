use clap::Parser;
use trip_content::config::ResourceSelection;
use trip_content::utils::{logger, validation::validate_non_empty_string};
use trip_content::{
    CliConfig, ConfigProvider, ContentClient, ContentEngine, ContentError, Result, Settings,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trip-content CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ trip-content failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<()> {
    // 合併並驗證設定
    let settings: Settings = cli.to_settings()?;
    tracing::info!(
        "🔧 Backend {} | package {} | locale {} | max retries {}",
        settings.base_url,
        settings.package_id,
        settings.locale,
        settings.retry.max_retries
    );

    let http = reqwest::Client::builder()
        .user_agent(concat!("trip-content/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let client = ContentClient::with_client(settings, http);
    let package_id = client.default_package().to_string();
    let locale = client.config().locale();
    let fallback_on_empty = client.config().fallback_on_empty();

    let engine = ContentEngine::new(client).with_fallback_on_empty(fallback_on_empty);

    let json = match cli.resource {
        ResourceSelection::All => {
            serde_json::to_string_pretty(&engine.load_all(&package_id, locale).await)?
        }
        ResourceSelection::Reviews => {
            serde_json::to_string_pretty(&engine.reviews(&package_id, locale).await)?
        }
        ResourceSelection::Images => {
            serde_json::to_string_pretty(&engine.images(&package_id).await)?
        }
        ResourceSelection::Itinerary => {
            serde_json::to_string_pretty(&engine.itinerary(&package_id, locale).await)?
        }
    };

    match &cli.output {
        Some(path) => {
            validate_non_empty_string("output", path)?;
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(ContentError::IoError)?;
                }
            }
            std::fs::write(path, json)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
