//! # RRPproxy client
//!
//! A client for the RRPproxy domain registrar API. The interesting part
//! is the [`decode`] module: the API answers every call with a flat,
//! line-oriented body of `KEY = VALUE` assignments in which tabular
//! result sets are encoded as `property[NAME][INDEX] = VALUE` entries
//! plus a `column` manifest. The decoder turns that text into a typed
//! result - one record with scalar/list-valued properties, or an
//! ordered, column-filtered table of rows - with timestamps coerced
//! along the way.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rrpproxy_client::{ClientConfig, Credentials, Result, RrpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new(Credentials::from_env()?).ote(true);
//!     let client = RrpClient::new(config)?;
//!
//!     let status = client.status_domain("example.com").await?;
//!     println!("code: {:?}", status.envelope.code());
//!
//!     let domains = client.query_domain_list().await?;
//!     for row in &domains.rows {
//!         println!("{:?}", row.get("domain"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! CLI / caller
//!     │
//! RrpClient (api)        command semantics, e.g. non-200 price codes
//!     │
//! Transport (http)       GET /api/call?s_login=..&command=..&args
//!     │
//! decode                 scan lines → classify keys → accumulate →
//!                        Record (collapse) or Table (transpose + filter)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Credentials and endpoint configuration
pub mod config;

/// Response decoder for the line-oriented wire format
pub mod decode;

/// HTTP transport
pub mod http;

/// API commands
pub mod api;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::RrpClient;
pub use config::{ClientConfig, Credentials};
pub use decode::{decode, DecodedResponse, Property, RecordResponse, TableResponse, Value};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
