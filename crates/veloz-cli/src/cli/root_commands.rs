use clap::{Args, Subcommand};

use crate::cli::subcommands::{ClientCommands, OrderCommands, SettingsCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session identity.
    Login(LoginArgs),
    /// Discard the stored session.
    Logout,
    /// Show the logged-in identity.
    Whoami,
    /// Order and client figures for the logged-in identity.
    Dashboard,
    /// Clients.
    Clients {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Transport orders.
    Orders {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Profile, company, and notification settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Resolve a dashboard path to its section.
    Route(RouteArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Username.
    #[arg(long, short = 'u')]
    pub user: String,
    /// Password.
    #[arg(long, env = "VELOZ_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Route path, e.g. /dashboard/ordenes.
    pub path: String,
}
