//! RRPproxy API client

use crate::config::{ClientConfig, Credentials};
use crate::decode::{
    decode, decode_record, decode_table, DecodedResponse, RecordResponse, TableResponse,
};
use crate::error::{Error, Result};
use crate::http::Transport;
use tracing::debug;

/// Envelope code signalling a successfully completed command.
const CODE_SUCCESS: u32 = 200;

/// Client for the RRPproxy API
///
/// Wraps the transport and decodes every response. The generic
/// [`request`](RrpClient::request) method runs any command; the named
/// methods cover the common ones and apply their command-specific
/// semantics.
pub struct RrpClient {
    credentials: Credentials,
    transport: Transport,
}

impl RrpClient {
    /// Create a client from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            credentials: config.credentials,
            transport,
        })
    }

    /// Run an arbitrary API command; the response shape is inferred
    /// from the decoded body (tabular when a column manifest is present)
    pub async fn request(&self, command: &str, args: &[(&str, &str)]) -> Result<DecodedResponse> {
        let body = self.transport.call(&self.credentials, command, args).await?;
        Ok(decode(&body))
    }

    /// Run a command whose response is a single record
    pub async fn request_record(
        &self,
        command: &str,
        args: &[(&str, &str)],
    ) -> Result<RecordResponse> {
        let body = self.transport.call(&self.credentials, command, args).await?;
        Ok(decode_record(&body))
    }

    /// Run a command whose response is tabular
    pub async fn request_table(
        &self,
        command: &str,
        args: &[(&str, &str)],
    ) -> Result<TableResponse> {
        let body = self.transport.call(&self.credentials, command, args).await?;
        Ok(decode_table(&body))
    }

    /// Request the status of a domain (`StatusDomain`)
    pub async fn status_domain(&self, domain: &str) -> Result<RecordResponse> {
        self.request_record("StatusDomain", &[("domain", domain)])
            .await
    }

    /// Get the price for an action on a domain (`DomainPrice`).
    ///
    /// Extra arguments such as `("type", "ADDDOMAIN")` pass through to
    /// the API. A non-success envelope code is surfaced as
    /// [`Error::Command`]; pricing is the one command whose callers
    /// historically expect that check here.
    pub async fn domain_price(
        &self,
        domain: &str,
        args: &[(&str, &str)],
    ) -> Result<RecordResponse> {
        let mut all_args = vec![("domain", domain)];
        all_args.extend_from_slice(args);
        let response = self.request_record("DomainPrice", &all_args).await?;
        if response.envelope.code() == Some(CODE_SUCCESS) {
            Ok(response)
        } else {
            Err(command_failure(&response))
        }
    }

    /// Get information about a zone (TLD) (`GetZoneInfo`)
    pub async fn get_zone_info(&self, zone: &str, args: &[(&str, &str)]) -> Result<RecordResponse> {
        let mut all_args = vec![("zone", zone)];
        all_args.extend_from_slice(args);
        self.request_record("GetZoneInfo", &all_args).await
    }

    /// List the account's domains, ordered by expiration date
    /// (`QueryDomainList` in wide mode)
    pub async fn query_domain_list(&self) -> Result<TableResponse> {
        self.request_table(
            "QueryDomainList",
            &[("orderby", "DOMAINREGISTRATIONEXPIRATIONDATE"), ("wide", "1")],
        )
        .await
    }

    /// Convert an amount between currencies (`ConvertCurrency`)
    pub async fn convert_currency(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<RecordResponse> {
        let amount = amount.to_string();
        self.request_record(
            "ConvertCurrency",
            &[("amount", amount.as_str()), ("from", from), ("to", to)],
        )
        .await
    }

    /// Query the current exchange rates (`QueryExchangeRates`)
    pub async fn query_exchange_rates(&self) -> Result<DecodedResponse> {
        let response = self.request("QueryExchangeRates", &[]).await?;
        debug!(code = ?response.code(), "exchange rates fetched");
        Ok(response)
    }
}

impl std::fmt::Debug for RrpClient {
    // Credentials carry the account password; only the username is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RrpClient")
            .field("username", &self.credentials.username)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

fn command_failure(response: &RecordResponse) -> Error {
    Error::command(
        response.envelope.get("code").unwrap_or(""),
        response.envelope.description().unwrap_or(""),
    )
}
