use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use telemark::Node;

use crate::api::{Account, ApiResponse, CreateAccountRequest, CreatePageRequest, Page};
use crate::error::PublishError;

const API_BASE: &str = "https://api.telegra.ph";

/// Title used when a page is published without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Synchronous client for the telegra.ph API. The whole pipeline is a
/// single sequential pass, so requests block.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        Client {
            http: reqwest::blocking::Client::new(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Client against a different endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Client {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Register a new account and return it with its access token.
    pub fn create_account(
        &self,
        short_name: &str,
        author_name: &str,
    ) -> Result<Account, PublishError> {
        self.call(
            "createAccount",
            &CreateAccountRequest {
                short_name,
                author_name,
            },
        )
    }

    /// Publish a node tree as a new page under the given token.
    pub fn create_page(
        &self,
        access_token: &str,
        title: &str,
        content: &[Node],
    ) -> Result<Page, PublishError> {
        let title = if title.is_empty() { DEFAULT_TITLE } else { title };
        self.call(
            "createPage",
            &CreatePageRequest {
                access_token,
                title,
                content,
                return_content: false,
            },
        )
    }

    /// POST a JSON body to an API method and unwrap the response
    /// envelope.
    fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &impl Serialize,
    ) -> Result<T, PublishError> {
        let url = format!("{}/{}", self.base_url, method);
        debug!(%url, "calling telegra.ph");
        let response = self.http.post(&url).json(body).send()?;
        let envelope: ApiResponse<T> = response.json()?;
        if !envelope.ok {
            let message = envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(PublishError::Api(message));
        }
        envelope.result.ok_or_else(|| {
            PublishError::MalformedResponse("ok response without a result".to_string())
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new()
    }
}
