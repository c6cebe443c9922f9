//! Dashboard summary figures.
//!
//! Figures are computed over the ownership-scoped collection, so a WORKER's
//! counts cover only their own orders.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use veloz_core::entities::{Client, Order};
use veloz_core::enums::{OrderStatus, PaymentStatus};
use veloz_core::permission::has_permission;
use veloz_core::{Identity, Permission};

use crate::record::{matches_search, visible};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub completed: usize,
    /// Sum of amounts. Present only with `orders.view_amounts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    /// Unpaid orders. Present only with `orders.view_amounts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_payments: Option<usize>,
    /// Orders created on `today`. Shown in place of the money figures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_today: Option<usize>,
}

#[must_use]
pub fn order_stats(identity: &Identity, orders: &[Order], today: NaiveDate) -> OrderStats {
    let scoped: Vec<&Order> = visible(identity, orders).collect();
    let count = |status: OrderStatus| scoped.iter().filter(|o| o.status == status).count();

    let (revenue, pending_payments, created_today) =
        if has_permission(identity, Permission::OrdersViewAmounts) {
            let revenue: f64 = scoped.iter().map(|o| o.total_amount).sum();
            let unpaid = scoped
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Pending)
                .count();
            (Some(revenue), Some(unpaid), None)
        } else {
            let today_count = scoped.iter().filter(|o| o.created_on == today).count();
            (None, None, Some(today_count))
        };

    OrderStats {
        total: scoped.len(),
        pending: count(OrderStatus::Pending),
        in_transit: count(OrderStatus::InTransit),
        completed: count(OrderStatus::Completed),
        revenue,
        pending_payments,
        created_today,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    pub total: usize,
    pub registered_this_month: usize,
    pub matching_search: usize,
}

/// `month` is any date inside the month of interest.
#[must_use]
pub fn client_stats(
    identity: &Identity,
    clients: &[Client],
    month: NaiveDate,
    term: &str,
) -> ClientStats {
    let scoped: Vec<&Client> = visible(identity, clients).collect();
    ClientStats {
        total: scoped.len(),
        registered_this_month: scoped
            .iter()
            .filter(|c| {
                c.registered_on.year() == month.year() && c.registered_on.month() == month.month()
            })
            .count(),
        matching_search: scoped.iter().filter(|c| matches_search(**c, term)).count(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use veloz_api::fixtures;
    use veloz_core::enums::Role;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn admin_with_amounts_sees_money_figures() {
        let admin = Identity::new(
            1,
            "Admin",
            Role::Admin,
            [Permission::OrdersViewAmounts].into_iter().collect(),
        );
        let stats = order_stats(&admin, &fixtures::orders(), date(2025, 6, 2));
        assert_eq!(stats.total, 3);
        assert_eq!((stats.pending, stats.in_transit, stats.completed), (1, 1, 1));
        assert_eq!(stats.revenue, Some(4240.5));
        assert_eq!(stats.pending_payments, Some(2));
        assert_eq!(stats.created_today, None);
    }

    #[test]
    fn worker_counts_cover_own_orders_only() {
        let worker = Identity::new(2, "Karen", Role::Worker, Default::default());
        let stats = order_stats(&worker, &fixtures::orders(), date(2025, 6, 2));
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.revenue, None);
        assert_eq!(stats.created_today, Some(1));

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("revenue").is_none());
    }

    #[test]
    fn client_figures() {
        let worker = Identity::new(2, "Karen", Role::Worker, Default::default());
        let stats = client_stats(&worker, &fixtures::clients(), date(2025, 5, 1), "comercial");
        assert_eq!(
            stats,
            ClientStats {
                total: 5,
                registered_this_month: 5,
                matching_search: 1,
            }
        );
    }
}
