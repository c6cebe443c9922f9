use veloz_auth::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a protected command to its handler with the restored session.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Whoami => commands::session::whoami(ctx, session, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, session, flags).await,
        Commands::Clients { action } => {
            commands::clients::handle(&action, ctx, session, flags).await
        }
        Commands::Orders { action } => commands::orders::handle(&action, ctx, session, flags).await,
        Commands::Settings { action } => commands::settings::handle(&action, ctx, session, flags),
        Commands::Login(_) | Commands::Logout | Commands::Route(_) => {
            unreachable!("login/logout/route are pre-dispatched in main")
        }
    }
}
