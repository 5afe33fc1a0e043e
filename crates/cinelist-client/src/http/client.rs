/*
[INPUT]:  HTTP configuration (base URLs, reset-password addressing, timeout)
[OUTPUT]: Configured reqwest client and the shared request/decode-or-fail path
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::{CineListError, FailureCause, Result};
use super::operation::{Credentials, Operation};
use super::session::Session;

/// Base URL of the CineList backend in local development
const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
/// Origin the front end is served from in local development
const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";

/// Which base the reset-password target is resolved against.
///
/// Every other operation targets the backend. Reset password historically
/// used a path relative to the page origin, so that stays the default until
/// the product owner confirms which host should serve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPasswordBase {
    #[default]
    AppOrigin,
    Backend,
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend_url: String,
    pub app_origin: String,
    pub reset_password_base: ResetPasswordBase,
    /// Whole-request timeout. `None` waits until the exchange completes.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            app_origin: DEFAULT_APP_ORIGIN.to_string(),
            reset_password_base: ResetPasswordBase::default(),
            timeout_secs: None,
            user_agent: concat!("cinelist-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the CineList backend
///
/// Cheap to clone; clones share the connection pool and the [`Session`].
#[derive(Debug, Clone)]
pub struct CineListClient {
    http_client: Client,
    backend_url: Url,
    app_origin: Url,
    reset_password_base: ResetPasswordBase,
    session: Session,
}

impl CineListClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(CineListError::ClientBuild)?;

        let backend_url = parse_base(&config.backend_url)?;
        let app_origin = parse_base(&config.app_origin)?;

        Ok(Self {
            http_client,
            session: Session::new(backend_url.clone()),
            backend_url,
            app_origin,
            reset_password_base: config.reset_password_base,
        })
    }

    /// Create a client whose base URLs override the ones in `config`
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        backend_url: &str,
        app_origin: &str,
    ) -> Result<Self> {
        Self::with_config(ClientConfig {
            backend_url: backend_url.to_string(),
            app_origin: app_origin.to_string(),
            ..config
        })
    }

    /// The session cookie jar used by credentialed operations
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    pub fn app_origin(&self) -> &Url {
        &self.app_origin
    }

    pub fn reset_password_base(&self) -> ResetPasswordBase {
        self.reset_password_base
    }

    /// Resolve an endpoint (relative, no leading slash) for an operation
    pub fn endpoint_url(&self, operation: Operation, endpoint: &str) -> Result<Url> {
        let base = match (operation, self.reset_password_base) {
            (Operation::ResetPassword, ResetPasswordBase::AppOrigin) => &self.app_origin,
            _ => &self.backend_url,
        };
        base.join(endpoint)
            .map_err(|err| fail(operation, FailureCause::Target(err)))
    }

    /// Serialize a request payload to JSON
    pub(crate) fn encode<B>(&self, operation: Operation, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_vec(body).map_err(|err| fail(operation, FailureCause::Encode(err)))
    }

    /// Send a request and decode the JSON body of a 2xx response
    pub(crate) async fn send_json<T>(
        &self,
        operation: Operation,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(operation, endpoint, body).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| fail(operation, FailureCause::Transport(err)))?;
        serde_json::from_slice(&bytes).map_err(|err| fail(operation, FailureCause::Decode(err)))
    }

    /// Send a request whose 2xx response body is ignored
    pub(crate) async fn send_empty(
        &self,
        operation: Operation,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<()> {
        self.dispatch(operation, endpoint, body).await.map(|_| ())
    }

    async fn dispatch(
        &self,
        operation: Operation,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let url = self.endpoint_url(operation, endpoint)?;
        let method = operation.method();
        let credentials = operation.credentials();

        let mut builder = self.http_client.request(method.clone(), url.clone());
        if credentials == Credentials::Include {
            if let Some(cookie) = self.session.header_for(&url) {
                builder = builder.header(COOKIE, cookie);
            }
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        debug!(operation = %operation, method = %method, url = %url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|err| fail(operation, FailureCause::Transport(err)))?;

        if credentials == Credentials::Include {
            self.session.store_from(response.headers(), response.url());
        }

        let status = response.status();
        if !status.is_success() {
            return Err(fail(operation, FailureCause::from_status(status)));
        }
        debug!(operation = %operation, status = %status, "request succeeded");
        Ok(response)
    }
}

/// Log a failure and wrap it as the error returned to the caller.
fn fail(operation: Operation, cause: FailureCause) -> CineListError {
    error!(operation = %operation, error = %cause, "{}", operation.description());
    CineListError::OperationFailed { operation, cause }
}

/// Parse a base URL so that relative endpoints join under its path.
fn parse_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
