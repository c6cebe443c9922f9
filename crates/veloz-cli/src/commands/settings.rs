use chrono::{DateTime, Utc};
use serde::Serialize;
use veloz_auth::Session;
use veloz_view::settings::{
    NotificationKey, SettingsTab, company_form, password_form, profile_form, set_notification,
    visible_tabs,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::commands::shared::fields::apply_fields;
use crate::commands::shared::parse::parse_switch;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TabEntry {
    tab: SettingsTab,
    label: &'static str,
}

#[derive(Serialize)]
struct PasswordResponse {
    changed: bool,
    changed_at: DateTime<Utc>,
}

/// Handle `veloz settings`.
pub fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = session.identity();
    match action {
        SettingsCommands::Tabs => {
            let tabs = visible_tabs(identity)
                .into_iter()
                .map(|tab| TabEntry {
                    tab,
                    label: tab.label(),
                })
                .collect::<Vec<_>>();
            output(&tabs, flags.format)
        }
        SettingsCommands::Show => output(&ctx.settings.load(identity), flags.format),
        SettingsCommands::Profile(args) => {
            let mut settings = ctx.settings.load(identity);
            let mut form = profile_form(&settings.profile);
            let changed = apply_fields(&args.fields(), |name, value| form.set(identity, name, value))?;
            if changed == 0 {
                anyhow::bail!("settings profile: nothing to change");
            }
            settings.profile = form.begin_submit()?;
            form.complete(ctx.settings.save(identity, &settings))?;
            output(&settings.profile, flags.format)
        }
        SettingsCommands::Company(args) => {
            let settings = ctx.settings.load(identity);
            let mut form = company_form(&settings.company);
            let changed = apply_fields(&args.fields(), |name, value| form.set(identity, name, value))?;
            if changed == 0 {
                anyhow::bail!("settings company: nothing to change");
            }
            let company = form.begin_submit()?;
            form.complete(ctx.settings.save_company(&company))?;
            output(&company, flags.format)
        }
        SettingsCommands::Password(args) => {
            let mut form = password_form();
            apply_fields(&args.fields(), |name, value| form.set(identity, name, value))?;
            form.begin_submit()?;
            let mut settings = ctx.settings.load(identity);
            let changed_at = Utc::now();
            settings.password_changed_at = Some(changed_at);
            form.complete(ctx.settings.save(identity, &settings))?;
            tracing::info!(user = identity.id, "password change accepted");
            output(
                &PasswordResponse {
                    changed: true,
                    changed_at,
                },
                flags.format,
            )
        }
        SettingsCommands::Notify { key, state } => {
            let key: NotificationKey = key.parse()?;
            let enabled = parse_switch(state)?;
            let mut settings = ctx.settings.load(identity);
            set_notification(identity, &mut settings.notifications, key, enabled)?;
            ctx.settings.save(identity, &settings)?;
            output(&settings.notifications, flags.format)
        }
    }
}
