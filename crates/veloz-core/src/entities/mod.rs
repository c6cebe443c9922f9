//! Record structs for the dashboard's domain objects.
//!
//! Field names follow the backend's snake_case wire names via `#[serde(rename)]`.
//! The camelCase spellings used by older dashboard payloads are accepted as
//! aliases on input; output is always snake_case.

mod client;
mod order;
mod settings;

pub use client::{Client, NewClient};
pub use order::{NewOrder, Order};
pub use settings::{Company, NotificationPrefs, Profile, Settings};
