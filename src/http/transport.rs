//! GET transport for API calls

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Path of the API call endpoint under the base URL.
const CALL_PATH: &str = "/api/call";

/// Transport that issues API calls and returns the raw body text
pub struct Transport {
    client: Client,
    base_url: Url,
}

impl Transport {
    /// Create a transport from a client config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let base_url = Url::parse(config.endpoint())?;
        Ok(Self { client, base_url })
    }

    /// Issue one API command and return the response body.
    ///
    /// Credentials and the command name go into the query string the
    /// same way any other argument does; the API authenticates purely
    /// via the `s_login`/`s_pw` parameters.
    pub async fn call(
        &self,
        credentials: &Credentials,
        command: &str,
        args: &[(&str, &str)],
    ) -> Result<String> {
        let mut url = self.base_url.join(CALL_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("s_login", &credentials.username);
            pairs.append_pair("s_pw", &credentials.password);
            pairs.append_pair("command", command);
            for (key, value) in args {
                pairs.append_pair(key, value);
            }
        }

        debug!(command, args = args.len(), "issuing API call");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        debug!(command, bytes = body.len(), "received response body");
        Ok(body)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
