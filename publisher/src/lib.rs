pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod publish;

pub use api::{Account, Page};
pub use client::Client;
pub use credentials::{CredentialStore, Credentials};
pub use error::PublishError;
pub use publish::{AccountIdentity, Published, publish_markdown};
