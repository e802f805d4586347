use clap::Parser;
use menu_import_api::core::ConfigProvider;
use menu_import_api::utils::{logger, validation::Validate};
use menu_import_api::{CliConfig, MenuError, MenuServer, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting menu-import-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => serve(&config).await,
                Err(e) => Err(e),
            }
        }
        None => serve(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn serve<C: ConfigProvider + Validate>(config: &C) -> Result<(), MenuError> {
    // 驗證配置
    config.validate()?;

    let server = MenuServer::from_config(config).await?;
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    server.run(listener).await
}
