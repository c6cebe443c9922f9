//! Backend login: `POST /api/login/`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use veloz_auth::{AuthError, Authenticator};
use veloz_core::enums::Role;
use veloz_core::{Identity, PermissionSet};

use crate::{ApiClient, http::error_message};

const LOGIN_PATH: &str = "/api/login/";

#[derive(Serialize)]
struct LoginRequest<'a> {
    usuario: &'a str,
    contrasena: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    user: Option<LoginUser>,
    error: Option<String>,
}

/// The backend's user object. Any password field it echoes back is not
/// captured here and therefore never reaches the session record.
#[derive(Deserialize)]
struct LoginUser {
    id: Option<u64>,
    #[serde(alias = "displayName", alias = "display_name")]
    name: Option<String>,
    usuario: Option<String>,
    role: Role,
    #[serde(default)]
    permissions: PermissionSet,
}

/// [`Authenticator`] backed by the dashboard backend.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: ApiClient,
}

impl HttpAuthenticator {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let url = self.client.url(LOGIN_PATH);
        tracing::debug!(%url, "POST");
        let resp = self
            .client
            .http
            .post(&url)
            .json(&LoginRequest {
                usuario: username,
                contrasena: password,
            })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        identity_from_response(status, &body, username)
    }
}

const NO_ID_HINT: &str = "user record has no id; this backend cannot scope orders to a user, \
     set auth.source = \"static\" (VELOZ_AUTH__SOURCE=static) and list the users under [[auth.users]]";

/// Map a login response to an identity.
fn identity_from_response(status: u16, body: &str, username: &str) -> Result<Identity, AuthError> {
    match status {
        200..=299 => {}
        400 | 401 | 403 => return Err(AuthError::InvalidCredentials(error_message(body))),
        _ => {
            return Err(AuthError::Transport(format!(
                "status {status}: {}",
                error_message(body)
            )));
        }
    }

    let parsed: LoginResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedIdentity(e.to_string()))?;
    if !parsed.success {
        return Err(AuthError::InvalidCredentials(
            parsed.error.unwrap_or_else(|| "login rejected".into()),
        ));
    }
    let user = parsed
        .user
        .ok_or_else(|| AuthError::MalformedIdentity("no user object".into()))?;
    let id = user
        .id
        .ok_or_else(|| AuthError::MalformedIdentity(NO_ID_HINT.into()))?;
    let display_name = user
        .name
        .or(user.usuario)
        .unwrap_or_else(|| username.to_string());

    Ok(Identity::new(id, display_name, user.role, user.permissions))
}
