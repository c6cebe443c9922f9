use serde::Serialize;
use veloz_auth::Session;
use veloz_core::enums::Role;
use veloz_core::{Identity, Permission};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct IdentityResponse<'a> {
    id: u64,
    name: &'a str,
    role: Role,
    role_label: &'static str,
    permissions: Vec<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_file: Option<String>,
}

impl<'a> IdentityResponse<'a> {
    fn new(identity: &'a Identity) -> Self {
        Self {
            id: identity.id,
            name: &identity.display_name,
            role: identity.role,
            role_label: identity.role.label(),
            permissions: identity.permissions.sorted(),
            session_file: None,
        }
    }
}

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

/// Handle `veloz login`.
pub async fn login(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let authenticator = ctx.authenticator()?;
    let password = args.password.as_deref().unwrap_or_default();
    let identity =
        veloz_auth::login(authenticator.as_ref(), &ctx.sessions, &args.user, password).await?;
    output(&IdentityResponse::new(&identity), flags.format)
}

/// Handle `veloz logout`.
pub fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    veloz_auth::logout(&ctx.sessions)?;
    output(&LogoutResponse { logged_out: true }, flags.format)
}

/// Handle `veloz whoami`.
pub fn whoami(ctx: &AppContext, session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut response = IdentityResponse::new(session.identity());
    response.session_file = Some(ctx.sessions.path().display().to_string());
    output(&response, flags.format)
}
