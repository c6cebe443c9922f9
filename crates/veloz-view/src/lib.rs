//! # veloz-view
//!
//! Permission-scoped view state for the Veloz dashboard.
//!
//! - [`record`]: the scoped record filter (ownership, search, redaction)
//! - [`form`]: the form state controller and field schemas
//! - [`entity`]: the list-with-inline-create view shared by orders and clients
//! - [`orders`], [`clients`]: the two record kinds
//! - [`stats`]: dashboard figures
//! - [`settings`]: settings tabs, forms, and notification toggles
//!
//! Nothing here performs I/O except through a
//! [`RecordStore`](veloz_core::store::RecordStore) handed in by the caller.

pub mod clients;
pub mod entity;
pub mod error;
pub mod form;
pub mod orders;
pub mod record;
pub mod settings;
pub mod stats;

pub use entity::{EntityView, ViewMode};
pub use error::{FormError, ValidationError};
pub use form::{Draft, FieldKind, FieldSpec, FormController, FormState, FormValues};
pub use record::{Ownership, Record, scope};

use veloz_core::entities::{Client, NewClient, NewOrder, Order};

pub type OrdersView = EntityView<Order, NewOrder>;
pub type ClientsView = EntityView<Client, NewClient>;
