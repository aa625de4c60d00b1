//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// RRPproxy API command-line client
#[derive(Parser, Debug)]
#[command(name = "rrpproxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account username (defaults to RRPPROXY_USERNAME)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Account password (defaults to RRPPROXY_PASSWORD)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Use the OTE (test) environment
    #[arg(long, global = true)]
    pub ote: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the status of a domain
    StatusDomain {
        /// Domain name to query
        domain: String,
    },

    /// Get the price for an action on a domain
    DomainPrice {
        /// Domain name to price
        domain: String,

        /// Price action type (e.g. ADDDOMAIN, RENEWDOMAIN)
        #[arg(long = "type")]
        price_type: Option<String>,
    },

    /// Show information about a zone (TLD)
    ZoneInfo {
        /// Zone to query (e.g. com)
        zone: String,
    },

    /// List the account's domains, ordered by expiration date
    DomainList,

    /// Convert an amount between currencies
    ConvertCurrency {
        /// Amount to convert
        amount: f64,

        /// Source currency (e.g. USD)
        from: String,

        /// Target currency (e.g. EUR)
        to: String,
    },

    /// Show current exchange rates
    ExchangeRates,
}
