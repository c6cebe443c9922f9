use anyhow::{Context, anyhow};
use serde::Serialize;
use veloz_auth::Session;
use veloz_core::enums::OrderStatus;
use veloz_view::orders::{OrderAction, available_actions};
use veloz_view::record::find_visible;
use veloz_view::{OrdersView, Record};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{OrderCommands, OrderCreateArgs};
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

#[derive(Serialize)]
struct ActionsResponse {
    id: u64,
    status: OrderStatus,
    actions: Vec<OrderAction>,
    /// Statuses a status update may move to; empty unless offered.
    next_states: Vec<OrderStatus>,
}

/// Handle `veloz orders`.
pub async fn handle(
    action: &OrderCommands,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrderCommands::List { search } => list(search.as_deref(), ctx, session, flags).await,
        OrderCommands::Create(args) => create(args, ctx, session, flags).await,
        OrderCommands::Delete { id } => delete(*id, ctx, session, flags).await,
        OrderCommands::Actions { id } => actions(*id, ctx, session, flags).await,
    }
}

async fn list(
    search: Option<&str>,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.orders.list().await.context("failed to load orders")?;
    let mut view = OrdersView::new();
    if let Some(term) = search {
        view.set_search(term);
    }
    let mut rows = view.rows(session.identity(), &records);
    rows.truncate(effective_limit(flags.limit, ctx.default_limit()));
    output(&rows, flags.format)
}

async fn create(
    args: &OrderCreateArgs,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = session.identity();
    let mut view = OrdersView::new();
    view.open_create(identity)?;
    apply_fields(&args.fields(), |name, value| {
        view.set_field(identity, name, value)
    })?;
    let order = view.submit(identity, &*ctx.orders).await?;
    output(&order.project(identity), flags.format)
}

async fn delete(
    id: u64,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.orders.list().await.context("failed to load orders")?;
    OrdersView::new()
        .delete(session.identity(), &*ctx.orders, &records, id)
        .await?;
    output(
        &DeleteResponse {
            entity: "order",
            id,
            deleted: true,
        },
        flags.format,
    )
}

async fn actions(
    id: u64,
    ctx: &AppContext,
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = session.identity();
    let records = ctx.orders.list().await.context("failed to load orders")?;
    let order = find_visible(identity, &records, id).ok_or_else(|| anyhow!("order {id} not found"))?;

    let actions = available_actions(identity, order);
    let next_states = if actions.contains(&OrderAction::UpdateStatus) {
        order.status.allowed_next_states().to_vec()
    } else {
        Vec::new()
    };
    output(
        &ActionsResponse {
            id,
            status: order.status,
            actions,
            next_states,
        },
        flags.format,
    )
}
