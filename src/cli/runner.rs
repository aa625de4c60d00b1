//! CLI runner - executes commands

use crate::api::RrpClient;
use crate::cli::commands::{Cli, Commands};
use crate::config::{ClientConfig, Credentials};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let credentials =
            Credentials::resolve(self.cli.username.clone(), self.cli.password.clone())?;
        let config = ClientConfig::new(credentials).ote(self.cli.ote);
        debug!(endpoint = config.endpoint(), "resolved configuration");
        let client = RrpClient::new(config)?;

        let output = match &self.cli.command {
            Commands::StatusDomain { domain } => {
                serde_json::to_value(client.status_domain(domain).await?)?
            }
            Commands::DomainPrice { domain, price_type } => {
                let mut args: Vec<(&str, &str)> = Vec::new();
                if let Some(price_type) = price_type {
                    args.push(("type", price_type));
                }
                serde_json::to_value(client.domain_price(domain, &args).await?)?
            }
            Commands::ZoneInfo { zone } => {
                serde_json::to_value(client.get_zone_info(zone, &[]).await?)?
            }
            Commands::DomainList => serde_json::to_value(client.query_domain_list().await?)?,
            Commands::ConvertCurrency { amount, from, to } => {
                serde_json::to_value(client.convert_currency(*amount, from, to).await?)?
            }
            Commands::ExchangeRates => {
                serde_json::to_value(client.query_exchange_rates().await?)?
            }
        };

        self.print(&output)
    }

    fn print(&self, value: &Value) -> Result<()> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{rendered}");
        Ok(())
    }
}
