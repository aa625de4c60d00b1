//! CLI module
//!
//! Command-line interface over the API client.
//!
//! # Commands
//!
//! - `status-domain` - Look up a domain
//! - `domain-price` - Price an action on a domain
//! - `zone-info` - Show zone (TLD) information
//! - `domain-list` - List the account's domains
//! - `convert-currency` - Convert an amount between currencies
//! - `exchange-rates` - Show current exchange rates

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
