use reqwest::RequestBuilder;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AuthError {
    #[error("Failed to produce credentials: {0}")]
    Credentials(String),
}

/// Attaches authentication material to an outgoing gateway request.
///
/// The proxy client holds exactly one instance of this for its lifetime.
/// If `set` fails, the calling operation aborts before any network I/O.
pub trait ClientAuth: Send + Sync {
    fn set(&self, builder: RequestBuilder) -> Result<RequestBuilder, AuthError>;
}

pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl ClientAuth for BasicAuth {
    fn set(&self, builder: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(builder.basic_auth(&self.username, Some(&self.password)))
    }
}

pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

impl ClientAuth for BearerToken {
    fn set(&self, builder: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(builder.bearer_auth(&self.token))
    }
}

/// For gateways without authentication enabled.
pub struct NoAuth;

impl ClientAuth for NoAuth {
    fn set(&self, builder: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(builder)
    }
}
