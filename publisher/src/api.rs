use serde::{Deserialize, Serialize};

use telemark::Node;

/// Envelope wrapping every API method's response: either `ok` with a
/// `result`, or not-`ok` with an `error` description.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Account as returned by `createAccount`. Only the token matters
/// downstream; the identity fields are echoes of the request.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub access_token: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

/// A published page. The API reports the content path; the canonical
/// URL is derived from it rather than read from the response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Page {
    /// Canonical reader URL for this page.
    pub fn url(&self) -> String {
        format!("https://telegra.ph/{}", self.path)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateAccountRequest<'a> {
    pub short_name: &'a str,
    pub author_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    pub access_token: &'a str,
    pub title: &'a str,
    pub content: &'a [Node],
    pub return_content: bool,
}
