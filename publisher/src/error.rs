use std::fmt;

/// Failures surfaced by the publishing side. The converter itself is
/// total; everything that can go wrong lives here.
#[derive(Debug)]
pub enum PublishError {
    /// Transport-level failure reaching the API.
    Http(reqwest::Error),
    /// The API answered but reported a failure.
    Api(String),
    /// The API answered ok without the promised result payload.
    MalformedResponse(String),
    /// Reading or writing the credential file failed.
    CredentialIo(std::io::Error),
    /// The credential file exists but is not valid TOML.
    CredentialFormat(toml::de::Error),
    /// Credentials could not be encoded for storage.
    CredentialEncode(toml::ser::Error),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Http(e) => write!(f, "request failed: {}", e),
            PublishError::Api(message) => write!(f, "telegra.ph error: {}", message),
            PublishError::MalformedResponse(message) => {
                write!(f, "malformed response: {}", message)
            }
            PublishError::CredentialIo(e) => write!(f, "credential store I/O error: {}", e),
            PublishError::CredentialFormat(e) => write!(f, "credential file is invalid: {}", e),
            PublishError::CredentialEncode(e) => write!(f, "cannot encode credentials: {}", e),
        }
    }
}

impl std::error::Error for PublishError {}

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        PublishError::Http(e)
    }
}

impl From<std::io::Error> for PublishError {
    fn from(e: std::io::Error) -> Self {
        PublishError::CredentialIo(e)
    }
}

impl From<toml::de::Error> for PublishError {
    fn from(e: toml::de::Error) -> Self {
        PublishError::CredentialFormat(e)
    }
}

impl From<toml::ser::Error> for PublishError {
    fn from(e: toml::ser::Error) -> Self {
        PublishError::CredentialEncode(e)
    }
}
