//! Demo records served when `api.mode = "demo"`.

use chrono::NaiveDate;
use veloz_core::entities::{Client, Order};
use veloz_core::enums::{OrderStatus, PaymentMethod, PaymentStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Three orders: 1001 and 1003 assigned to worker 2, 1002 to worker 3.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1001,
            created_on: date(2025, 6, 2),
            sender_name: "Empresa Ejemplo".into(),
            recipient_name: "Tecnología Avanzada S.A.".into(),
            origin: "Lima".into(),
            destination: "Arequipa".into(),
            status: OrderStatus::InTransit,
            cargo_detail: "Equipos de computación".into(),
            payment_method: PaymentMethod::Transfer,
            payment_status: PaymentStatus::Paid,
            total_amount: 1250.00,
            assigned_worker: Some("Carlos Mendoza".into()),
            assigned_worker_id: Some(2),
            notes: Some("Entrega antes de las 3 PM".into()),
        },
        Order {
            id: 1002,
            created_on: date(2025, 6, 1),
            sender_name: "Servicios Integrales LTDA".into(),
            recipient_name: "Construcción del Norte".into(),
            origin: "Trujillo".into(),
            destination: "Chiclayo".into(),
            status: OrderStatus::Completed,
            cargo_detail: "Materiales de construcción".into(),
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            total_amount: 890.50,
            assigned_worker: Some("Ana García".into()),
            assigned_worker_id: Some(3),
            notes: None,
        },
        Order {
            id: 1003,
            created_on: date(2025, 6, 1),
            sender_name: "Comercial del Sur".into(),
            recipient_name: "Distribuidora Central".into(),
            origin: "Cusco".into(),
            destination: "Lima".into(),
            status: OrderStatus::Pending,
            cargo_detail: "Productos textiles".into(),
            payment_method: PaymentMethod::Check,
            payment_status: PaymentStatus::Pending,
            total_amount: 2100.00,
            assigned_worker: Some("Carlos Mendoza".into()),
            assigned_worker_id: Some(2),
            notes: None,
        },
    ]
}

fn client(
    id: u64,
    business_name: &str,
    address: &str,
    mobile: &str,
    contact_name: &str,
    registered_on: NaiveDate,
) -> Client {
    Client {
        id,
        business_name: business_name.into(),
        tax_id: String::new(),
        contact_name: contact_name.into(),
        email: String::new(),
        mobile: mobile.into(),
        landline: String::new(),
        address: address.into(),
        city: "Lima".into(),
        postal_code: String::new(),
        registered_on,
    }
}

/// Five clients registered in late May 2025.
#[must_use]
pub fn clients() -> Vec<Client> {
    vec![
        client(1, "Empresa Ejemplo", "Calle 123", "123456789", "Juan Pérez", date(2025, 5, 26)),
        client(
            2,
            "Tecnología Avanzada S.A.",
            "Av. Principal 456",
            "987654321",
            "María García",
            date(2025, 5, 25),
        ),
        client(
            3,
            "Servicios Integrales LTDA",
            "Jr. Comercio 789",
            "456789123",
            "Carlos López",
            date(2025, 5, 24),
        ),
        client(
            4,
            "Construcción y Desarrollo SAC",
            "Av. Industrial 321",
            "321654987",
            "Ana Torres",
            date(2025, 5, 23),
        ),
        client(
            5,
            "Comercial del Norte EIRL",
            "Jr. Los Andes 654",
            "654321789",
            "Pedro Mendoza",
            date(2025, 5, 22),
        ),
    ]
}
