use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use veloz_auth::Session;
use veloz_core::enums::{Role, Section};
use veloz_view::stats::{ClientStats, OrderStats, client_stats, order_stats};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SectionEntry {
    section: Section,
    path: &'static str,
}

#[derive(Serialize)]
struct DashboardResponse<'a> {
    user: &'a str,
    role: Role,
    sections: Vec<SectionEntry>,
    orders: OrderStats,
    clients: ClientStats,
}

/// Handle `veloz dashboard`.
pub async fn handle(ctx: &AppContext, session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = session.identity();
    let orders = ctx.orders.list().await.context("failed to load orders")?;
    let clients = ctx.clients.list().await.context("failed to load clients")?;
    let today = Local::now().date_naive();

    let response = DashboardResponse {
        user: &identity.display_name,
        role: identity.role,
        sections: Section::ALL
            .into_iter()
            .map(|section| SectionEntry {
                section,
                path: section.path(),
            })
            .collect(),
        orders: order_stats(identity, &orders, today),
        clients: client_stats(identity, &clients, today, ""),
    };
    output(&response, flags.format)
}
