use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `veloz login`")]
    NotAuthenticated,

    #[error("username and password are required")]
    EmptyCredentials,

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("login service unreachable: {0}")]
    Transport(String),

    #[error("login response is missing the user record: {0}")]
    MalformedIdentity(String),

    #[error("session store error: {0}")]
    SessionStore(String),
}
