//! Properties of the permission evaluator and the scoped record filter.

use chrono::NaiveDate;
use proptest::prelude::*;
use veloz_core::entities::Order;
use veloz_core::enums::{OrderStatus, PaymentMethod, PaymentStatus, Role};
use veloz_core::permission::{has_permission, has_permission_key};
use veloz_core::{Identity, Permission, PermissionSet};
use veloz_view::scope;

const PLACES: &[&str] = &["Lima", "Arequipa", "Cusco", "Trujillo", "Chiclayo"];

fn order(index: usize, owner: Option<u64>, amount: f64, place: usize) -> Order {
    Order {
        id: 1000 + index as u64,
        created_on: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        sender_name: "Empresa Ejemplo".into(),
        recipient_name: "Distribuidora Central".into(),
        origin: PLACES[place].into(),
        destination: PLACES[(place + 1) % PLACES.len()].into(),
        status: OrderStatus::Pending,
        cargo_detail: "Cajas".into(),
        payment_method: PaymentMethod::Cash,
        payment_status: PaymentStatus::Pending,
        total_amount: amount,
        assigned_worker: None,
        assigned_worker_id: owner,
        notes: None,
    }
}

fn orders_strategy() -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(
        (prop::option::of(1u64..5), 1.0f64..5000.0, 0..PLACES.len()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (owner, amount, place))| order(index, owner, amount, place))
            .collect()
    })
}

fn permissions_strategy() -> impl Strategy<Value = PermissionSet> {
    prop::sample::subsequence(Permission::ALL.to_vec(), 0..=Permission::ALL.len())
        .prop_map(|keys| keys.into_iter().collect())
}

fn identity_strategy(role: Role) -> impl Strategy<Value = Identity> {
    (1u64..5, permissions_strategy())
        .prop_map(move |(id, permissions)| Identity::new(id, "Test", role, permissions))
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("lima".to_string()),
        Just("CUSCO".to_string()),
        Just("100".to_string()),
        "[0-9]{1,2}",
    ]
}

proptest! {
    #[test]
    fn membership_is_exact(identity in identity_strategy(Role::Worker)) {
        for permission in Permission::ALL {
            prop_assert_eq!(
                has_permission(&identity, permission),
                identity.permissions.sorted().contains(&permission)
            );
            prop_assert!(!has_permission_key(&identity, &permission.as_str().to_uppercase()));
        }
    }

    #[test]
    fn workers_never_see_foreign_orders(
        identity in identity_strategy(Role::Worker),
        orders in orders_strategy(),
        term in term_strategy(),
    ) {
        for row in scope(&identity, &orders, &term) {
            let source = orders.iter().find(|o| o.id == row.id).unwrap();
            prop_assert_eq!(source.assigned_worker_id, Some(identity.id));
        }
    }

    #[test]
    fn admins_see_everything_before_search(
        identity in identity_strategy(Role::Admin),
        orders in orders_strategy(),
    ) {
        let ids: Vec<u64> = scope(&identity, &orders, "").iter().map(|r| r.id).collect();
        let expected: Vec<u64> = orders.iter().map(|o| o.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn scope_is_idempotent(
        identity in identity_strategy(Role::Worker),
        orders in orders_strategy(),
        term in term_strategy(),
    ) {
        let before = orders.clone();
        let first = scope(&identity, &orders, &term);
        let second = scope(&identity, &orders, &term);
        prop_assert_eq!(first, second);
        prop_assert_eq!(before, orders);
    }

    #[test]
    fn amounts_follow_view_amounts(
        identity in identity_strategy(Role::Admin),
        orders in orders_strategy(),
    ) {
        let reveal = has_permission(&identity, Permission::OrdersViewAmounts);
        for row in scope(&identity, &orders, "") {
            prop_assert_eq!(row.total_amount.is_some(), reveal);
            prop_assert_eq!(row.payment_status.is_some(), reveal);
        }
    }
}

#[test]
fn worker_scenario_hides_other_owner_and_amount() {
    let worker = Identity::new(2, "Karen", Role::Worker, PermissionSet::new());
    let orders = vec![order(1, Some(2), 50.0, 0), order(2, Some(3), 90.0, 0)];
    let rows = scope(&worker, &orders, "");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1001);
    assert!(rows[0].total_amount.is_none());
}

#[test]
fn search_100_matches_1001_not_2005() {
    let admin = Identity::new(1, "Admin", Role::Admin, PermissionSet::new());
    let mut orders = vec![order(1, None, 1.0, 0), order(0, None, 1.0, 0)];
    orders[1].id = 2005;
    let ids: Vec<u64> = scope(&admin, &orders, "100").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1001]);
}
