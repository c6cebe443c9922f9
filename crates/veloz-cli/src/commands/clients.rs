use anyhow::Context;
use serde::Serialize;
use veloz_auth::Session;
use veloz_view::{ClientsView, Record};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ClientCommands, ClientCreateArgs};
use crate::commands::shared::fields::apply_fields;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse {
    entity: &'static str,
    id: u64,
    deleted: bool,
}

/// Handle `veloz clients`.
pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::List { search } => {
            let records = ctx.clients.list().await.context("failed to load clients")?;
            let mut view = ClientsView::new();
            if let Some(term) = search {
                view.set_search(term.as_str());
            }
            let mut rows = view.rows(session.identity(), &records);
            rows.truncate(effective_limit(flags.limit, ctx.default_limit()));
            output(&rows, flags.format)
        }
        ClientCommands::Create(args) => create(args, ctx, session, flags).await,
        ClientCommands::Delete { id } => {
            let records = ctx.clients.list().await.context("failed to load clients")?;
            ClientsView::new()
                .delete(session.identity(), &*ctx.clients, &records, *id)
                .await?;
            output(
                &DeleteResponse {
                    entity: "client",
                    id: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}

async fn create(
    args: &ClientCreateArgs,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = session.identity();
    let mut view = ClientsView::new();
    view.open_create(identity)?;
    apply_fields(&args.fields(), |name, value| {
        view.set_field(identity, name, value)
    })?;
    let client = view.submit(identity, &*ctx.clients).await?;
    output(&client.project(identity), flags.format)
}
