use clap::Parser;
use menu_import_api::utils::{logger, validation::Validate};
use menu_import_api::{DocsExporter, LocalStorage, LogoPolicy, SchemaPublisher, TomlConfig};

#[derive(Parser, Debug)]
#[command(name = "export-docs")]
#[command(about = "Export the API documentation page as a standalone HTML file")]
struct Args {
    /// PNG embedded as the documentation logo
    #[arg(long, default_value = menu_import_api::config::DEFAULT_LOGO_PATH)]
    logo_path: String,

    /// Directory receiving index.html
    #[arg(short, long, default_value = menu_import_api::config::DEFAULT_DOCS_DIR)]
    output_dir: String,

    /// TOML configuration file; its [docs] section overrides the flags above
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    if let Some(path) = &args.config {
        let config = match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };
        if let Err(e) = config.validate() {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        args.logo_path = config.docs.logo_path;
        args.output_dir = config.docs.output_dir;
    }

    tracing::info!("🖼️  Logo: {}", args.logo_path);
    tracing::info!("📁 Output directory: {}", args.output_dir);

    // 缺少 logo 時直接失敗
    let publisher = SchemaPublisher::new(&args.logo_path, LogoPolicy::Required);
    let exporter = DocsExporter::new(LocalStorage::new(args.output_dir.clone()));

    let result = match publisher.document().await {
        Ok(document) => exporter.export(document).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(path) => {
            tracing::info!("✅ Documentation exported");
            println!("✅ Documentation exported to {}", path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Documentation export failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
