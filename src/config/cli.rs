use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_socket_addr, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-import-api")]
#[command(about = "HTTP API serving menus by date or date range")]
pub struct CliConfig {
    #[arg(long, default_value = super::DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, default_value = super::DEFAULT_LOGO_PATH)]
    pub logo_path: String,

    /// JSON file with a `{"menus": [...]}` document; sample menus are served when omitted
    #[arg(long)]
    pub menus_file: Option<String>,

    /// TOML configuration file; overrides the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn logo_path(&self) -> &str {
        &self.logo_path
    }

    fn menus_file(&self) -> Option<&str> {
        self.menus_file.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_path("logo_path", &self.logo_path)?;
        if let Some(path) = &self.menus_file {
            validate_path("menus_file", path)?;
        }
        Ok(())
    }
}
