use clap::{Args, Subcommand};

/// Settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// List the settings tabs the logged-in identity may open.
    Tabs,
    /// Show saved settings.
    Show,
    /// Update the profile.
    Profile(ProfileArgs),
    /// Update company details (requires config.edit_all).
    Company(CompanyArgs),
    /// Change the password.
    Password(PasswordArgs),
    /// Turn a notification on or off.
    Notify {
        /// order_emails, client_emails, sms_alerts, or push.
        key: String,
        /// on or off.
        state: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
}

impl ProfileArgs {
    pub fn fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("position", self.position.as_deref()),
        ]
    }
}

#[derive(Clone, Debug, Args)]
pub struct CompanyArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub ruc: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
}

impl CompanyArgs {
    pub fn fields(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("name", self.name.as_deref()),
            ("ruc", self.ruc.as_deref()),
            ("address", self.address.as_deref()),
            ("phone", self.phone.as_deref()),
            ("email", self.email.as_deref()),
            ("website", self.website.as_deref()),
        ]
    }
}

#[derive(Clone, Debug, Args)]
pub struct PasswordArgs {
    #[arg(long, env = "VELOZ_CURRENT_PASSWORD", hide_env_values = true)]
    pub current: Option<String>,
    #[arg(long = "new", env = "VELOZ_NEW_PASSWORD", hide_env_values = true)]
    pub new_password: Option<String>,
    #[arg(long, env = "VELOZ_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm: Option<String>,
}

impl PasswordArgs {
    pub fn fields(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("current_password", self.current.as_deref()),
            ("new_password", self.new_password.as_deref()),
            ("confirm_password", self.confirm.as_deref()),
        ]
    }
}
