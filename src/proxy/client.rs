use crate::{
    auth::{AuthError, ClientAuth},
    utils::remove_trailing_slash,
};
use reqwest::{Client as HttpClient, Error as ReqwestError, Method, Response};
use std::{sync::Arc, time::Duration};
use thiserror::Error as ThisError;
use url::Url;

#[derive(ThisError, Debug)]
pub enum NewClientError {
    #[error("Invalid gateway URL: {0}")]
    InvalidGatewayUrl(#[source] url::ParseError),
    #[error("HTTP transport build error: {0}")]
    TransportBuild(#[source] ReqwestError),
}

#[derive(ThisError, Debug)]
pub enum ProxyError {
    #[error("Authentication error: {0}")]
    Auth(#[source] AuthError),
    #[error("Serializing error: {0}")]
    Serializing(
        #[source]
        #[from]
        serde_json::Error,
    ),
    #[error("HTTP build error: {0}")]
    HttpBuilder(#[source] ReqwestError),
    #[error("HTTP error: {0}")]
    Http(#[source] ReqwestError),
}

/// Client for the lifecycle endpoints of an OpenFaaS gateway.
///
/// Holds no mutable state after construction, so independent callers may
/// share it. Operations are sequential; no call is retried.
pub struct ProxyClient {
    client: HttpClient,
    /// Base URL of the OpenFaaS gateway
    /// e.g. http://gateway.openfaas:8080
    base_url: String,
    auth: Arc<dyn ClientAuth>,
    timeout: Duration,
}

impl ProxyClient {
    /// Creates a client for the gateway at `gateway_url`. A `transport`
    /// override replaces the default one, e.g. to skip certificate
    /// verification via [`make_http_client`]. `timeout` bounds every
    /// single gateway call issued through this client.
    pub fn new(
        auth: Arc<dyn ClientAuth>,
        gateway_url: &str,
        transport: Option<HttpClient>,
        timeout: Duration,
    ) -> Result<Self, NewClientError> {
        let base_url = remove_trailing_slash(gateway_url);
        Url::parse(&base_url).map_err(NewClientError::InvalidGatewayUrl)?;

        let client = match transport {
            Some(client) => client,
            None => make_http_client(false).map_err(NewClientError::TransportBuild)?,
        };

        Ok(Self {
            client,
            base_url,
            auth,
            timeout,
        })
    }

    /// Sends one authenticated request against the gateway. At most one
    /// network attempt is made; authentication failures abort before any
    /// I/O. Dropping the returned future or hitting the command timeout
    /// aborts the in-flight call with [`ProxyError::Http`].
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        bearer_override: Option<&str>,
    ) -> Result<Response, ProxyError> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .client
            .request(method, url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            builder = builder.body(body);
        }

        // A per-call token replaces the client's authenticator outright;
        // applying both would send two Authorization headers.
        let builder = match bearer_override {
            Some(token) => builder.bearer_auth(token),
            None => self.auth.set(builder).map_err(ProxyError::Auth)?,
        };

        let req = builder.build().map_err(ProxyError::HttpBuilder)?;

        self.client.execute(req).await.map_err(ProxyError::Http)
    }
}

/// Builds the gateway transport. `tls_insecure` disables certificate
/// verification for self-signed gateways.
pub fn make_http_client(tls_insecure: bool) -> Result<HttpClient, ReqwestError> {
    HttpClient::builder()
        .danger_accept_invalid_certs(tls_insecure)
        .build()
}
