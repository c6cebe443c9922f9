//! Orders and clients views driven end to end against the in-memory store.

use pretty_assertions::assert_eq;
use veloz_api::MemoryStore;
use veloz_core::entities::{Client, Order};
use veloz_core::enums::{OrderStatus, Role};
use veloz_core::store::RecordStore;
use veloz_core::{Identity, Permission, PermissionSet};
use veloz_view::{ClientsView, FormError, FormState, OrdersView, ViewMode};

fn admin() -> Identity {
    Identity::new(1, "Administrador", Role::Admin, Permission::ALL.into_iter().collect())
}

fn karen() -> Identity {
    Identity::new(
        2,
        "Karen",
        Role::Worker,
        [Permission::OrdersViewAssigned, Permission::OrdersUpdateStatus]
            .into_iter()
            .collect(),
    )
}

#[tokio::test]
async fn admin_creates_an_order_and_returns_to_list() {
    let store = MemoryStore::<Order>::demo();
    let mut view = OrdersView::new();
    view.open_create(&admin()).unwrap();
    assert_eq!(view.mode(), ViewMode::Create);

    for (field, value) in [
        ("sender_name", "Comercial del Sur"),
        ("recipient_name", "Empresa Ejemplo"),
        ("origin", "Cusco"),
        ("destination", "Lima"),
        ("cargo_detail", "Artesanías"),
        ("total_amount", "310"),
        ("assigned_worker_id", "2"),
    ] {
        view.set_field(&admin(), field, value).unwrap();
    }
    let created = view.submit(&admin(), &store).await.unwrap();

    assert_eq!(created.id, 1004);
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(view.mode(), ViewMode::List);
    assert_eq!(view.form().state(), FormState::Idle);

    let records = store.list().await.unwrap();
    let karen_rows = view.rows(&karen(), &records);
    let ids: Vec<u64> = karen_rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1001, 1003, 1004]);
    assert!(karen_rows.iter().all(|r| r.total_amount.is_none()));
}

#[tokio::test]
async fn worker_cannot_open_or_delete_orders() {
    let store = MemoryStore::<Order>::demo();
    let mut view = OrdersView::new();
    assert!(matches!(view.open_create(&karen()), Err(FormError::Denied(_))));

    let records = store.list().await.unwrap();
    let err = view.delete(&karen(), &store, &records, 1001).await.unwrap_err();
    assert_eq!(err.to_string(), "Permission denied: 'orders.delete' is required");
    assert_eq!(store.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn delete_outside_scope_is_refused() {
    let store = MemoryStore::<Order>::demo();
    let deleter = Identity::new(
        2,
        "Karen",
        Role::Worker,
        [Permission::OrdersDelete].into_iter().collect(),
    );
    let view = OrdersView::new();
    let records = store.list().await.unwrap();

    assert!(view.delete(&deleter, &store, &records, 1002).await.is_err());
    view.delete(&deleter, &store, &records, 1003).await.unwrap();
    let ids: Vec<u64> = store.list().await.unwrap().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1001, 1002]);
}

#[tokio::test]
async fn any_identity_can_add_a_client() {
    let store = MemoryStore::<Client>::demo();
    let worker = Identity::new(3, "Ana", Role::Worker, PermissionSet::new());
    let mut view = ClientsView::new();
    view.open_create(&worker).unwrap();
    view.set_field(&worker, "business_name", "Andina SAC").unwrap();
    view.set_field(&worker, "contact_name", "Rosa Quispe").unwrap();
    view.set_field(&worker, "mobile", "955444333").unwrap();
    view.set_field(&worker, "address", "Av. Sol 100").unwrap();

    let client = view.submit(&worker, &store).await.unwrap();
    assert_eq!(client.id, 6);

    view.set_search("955");
    let records = store.list().await.unwrap();
    let rows = view.rows(&worker, &records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].business_name, "Andina SAC");
}
