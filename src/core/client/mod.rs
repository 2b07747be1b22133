//! Public client surface + builder.
//! Defaults (host, referer, UA) live in `constants`.

pub(crate) mod constants;

use crate::core::{VgError, net, services::FundService};
use constants::{DEFAULT_BASE_API, FUND_PATH_PREFIX, RESOURCE_FORMAT, USER_AGENT};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// Configured handle to the Vanguard fund API.
///
/// Cloning is cheap: the underlying `reqwest::Client` (and its connection pool)
/// is shared between clones.
#[derive(Debug, Clone)]
pub struct VgClient {
    http: Client,
    base_api: Url,
    debug: bool,
}

impl Default for VgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl VgClient {
    /// Create a new builder.
    pub fn builder() -> VgClientBuilder {
        VgClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn debug(&self) -> bool {
        self.debug
    }

    /// Builds `{base}/rs/ire/01/ind/fund/{symbol}/{resource}.json[?query]`.
    pub(crate) fn resource_url(
        &self,
        symbol: &str,
        resource: &str,
        query: Option<&str>,
    ) -> Result<Url, VgError> {
        let path = format!("{FUND_PATH_PREFIX}/{symbol}/{resource}.{RESOURCE_FORMAT}");
        let mut url = self.base_api.join(&path)?;
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }
}

impl FundService for VgClient {
    fn fetch_resource<'a>(
        &'a self,
        symbol: &'a str,
        resource: &'a str,
        query: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<String, VgError>> + Send + 'a>> {
        Box::pin(net::get_resource(self, symbol, resource, query))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct VgClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    custom_client: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    debug: bool,
}

impl VgClientBuilder {
    /// Override the User-Agent. Ignored when a custom client is supplied.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://api.vanguard.com/`).
    ///
    /// Resource paths are joined onto this URL, so it should end with `/`.
    #[must_use]
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Use an already configured `reqwest::Client` instead of building one.
    ///
    /// Timeouts and the User-Agent set on this builder do not apply to it.
    #[must_use]
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Echo every raw response body to stderr.
    ///
    /// Also enabled by setting `VG_DEBUG=1` in the environment.
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Finish configuration.
    ///
    /// # Errors
    ///
    /// Returns `VgError` if the default base URL cannot be parsed or the HTTP
    /// client cannot be initialized.
    pub fn build(self) -> Result<VgClient, VgError> {
        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };

        let http = match self.custom_client {
            Some(c) => c,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        let debug = self.debug || std::env::var("VG_DEBUG").ok().as_deref() == Some("1");

        Ok(VgClient {
            http,
            base_api,
            debug,
        })
    }
}
