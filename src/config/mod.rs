use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sleep-glance")]
#[command(about = "Reads recent sleep records from a health-data service")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub service_url: String,

    #[arg(long, default_value = "there")]
    pub display_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn service_url(&self) -> &str {
        &self.service_url
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service_url", &self.service_url)?;
        validate_non_empty_string("display_name", &self.display_name)?;
        Ok(())
    }
}
