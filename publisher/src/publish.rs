use tracing::info;

use telemark::{markdown_to_nodes, split_title};

use crate::client::Client;
use crate::credentials::{CredentialStore, Credentials};
use crate::error::PublishError;

/// Identity used when the store holds no account yet and one has to be
/// created.
#[derive(Debug, Clone)]
pub struct AccountIdentity {
    pub short_name: String,
    pub author_name: String,
}

/// Outcome of a successful publish.
#[derive(Debug, Clone)]
pub struct Published {
    pub title: String,
    pub path: String,
    pub url: String,
}

/// Publish a markdown document and return where it ended up.
///
/// The title comes from `title_override` if given, else from a leading
/// heading line, else the API default. The heading line, when present,
/// is stripped from the published body either way.
pub fn publish_markdown(
    client: &Client,
    store: &CredentialStore,
    source: &str,
    title_override: Option<&str>,
    identity: &AccountIdentity,
) -> Result<Published, PublishError> {
    let (heading_title, body) = split_title(source);
    let title = title_override
        .map(str::to_string)
        .or(heading_title)
        .unwrap_or_default();

    let content = markdown_to_nodes(body);
    let credentials = ensure_credentials(client, store, identity)?;

    let page = client.create_page(&credentials.access_token, &title, &content)?;
    info!(path = %page.path, "published");

    Ok(Published {
        title: page.title.clone().unwrap_or(title),
        url: page.url(),
        path: page.path,
    })
}

/// Reuse stored credentials, or create a fresh account and persist its
/// token for the next run.
fn ensure_credentials(
    client: &Client,
    store: &CredentialStore,
    identity: &AccountIdentity,
) -> Result<Credentials, PublishError> {
    if let Some(credentials) = store.load()? {
        return Ok(credentials);
    }
    info!(short_name = %identity.short_name, "no stored token, creating account");
    let account = client.create_account(&identity.short_name, &identity.author_name)?;
    let credentials = Credentials {
        access_token: account.access_token,
        short_name: account
            .short_name
            .or_else(|| Some(identity.short_name.clone())),
        author_name: account
            .author_name
            .or_else(|| Some(identity.author_name.clone())),
    };
    store.store(&credentials)?;
    Ok(credentials)
}
