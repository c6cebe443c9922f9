//! The scoped record filter.
//!
//! [`scope`] narrows a collection in three passes:
//!
//! 1. ownership: ADMIN keeps everything, WORKER keeps [`Ownership::Shared`]
//!    records and the [`Ownership::Owned`] records whose owner is their id
//! 2. search: a record matches if any case-folded text field contains the
//!    case-folded term, or any literal field contains the term verbatim
//! 3. projection: each survivor becomes its view shape with gated fields left
//!    out when the identity lacks the gating permission
//!
//! The input slice is only borrowed, so scoping twice gives the same result.

use serde::Serialize;
use veloz_core::enums::Role;
use veloz_core::permission::has_permission;
use veloz_core::{Identity, Permission};

/// How a record kind is scoped for WORKER identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Only the assigned worker sees it. No owner means no worker sees it.
    Owned,
    /// Every authenticated identity sees it.
    Shared,
}

/// A record kind the dashboard lists.
pub trait Record: Clone + Send + Sync {
    /// The emitted shape. Gated fields are `Option`s.
    type View: Serialize + Clone;

    /// Singular entity name used in messages (`"order"`).
    const ENTITY: &'static str;

    const OWNERSHIP: Ownership;

    /// Fields removed from the view unless the permission is held.
    const REDACTIONS: &'static [(&'static str, Permission)] = &[];

    /// Permission needed to delete one record, if any.
    const DELETE_PERMISSION: Option<Permission> = None;

    fn id(&self) -> u64;

    /// The owner reference. Only consulted for [`Ownership::Owned`] kinds.
    fn owner(&self) -> Option<u64> {
        None
    }

    /// Fields matched case-insensitively.
    fn search_text(&self) -> Vec<&str>;

    /// Fields matched verbatim, such as the decimal id.
    fn search_literals(&self) -> Vec<String> {
        vec![self.id().to_string()]
    }

    fn project(&self, identity: &Identity) -> Self::View;

    /// True unless `field` is redacted for this identity.
    fn reveals(identity: &Identity, field: &str) -> bool {
        Self::REDACTIONS
            .iter()
            .filter(|(name, _)| *name == field)
            .all(|(_, permission)| has_permission(identity, *permission))
    }
}

/// Ownership pass only.
pub fn visible<'a, R: Record>(
    identity: &'a Identity,
    records: &'a [R],
) -> impl Iterator<Item = &'a R> + 'a {
    records.iter().filter(move |record| owns(identity, *record))
}

fn owns<R: Record>(identity: &Identity, record: &R) -> bool {
    match (identity.role, R::OWNERSHIP) {
        (Role::Admin, _) | (Role::Worker, Ownership::Shared) => true,
        (Role::Worker, Ownership::Owned) => record.owner() == Some(identity.id),
    }
}

/// Whether `record` matches the free-text `term`. The empty term matches all.
pub fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let folded = term.to_lowercase();
    record
        .search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(&folded))
        || record
            .search_literals()
            .iter()
            .any(|field| field.contains(term))
}

/// Ownership, search, then projection.
pub fn scope<R: Record>(identity: &Identity, records: &[R], term: &str) -> Vec<R::View> {
    visible(identity, records)
        .filter(|record| matches_search(*record, term))
        .map(|record| record.project(identity))
        .collect()
}

/// Find one record by id within what the identity may see.
pub fn find_visible<'a, R: Record>(identity: &'a Identity, records: &'a [R], id: u64) -> Option<&'a R> {
    visible(identity, records).find(|record| record.id() == id)
}
