//! # veloz-core
//!
//! Core types, permission evaluation, and error types for Veloz.
//!
//! This crate provides the foundational types shared across all Veloz crates:
//! - Typed permission keys and the permission set held by an identity
//! - The authenticated identity and its role
//! - Order and client records plus their create payloads
//! - Status enums with state machine transitions
//! - Dashboard sections and their fixed route paths
//! - The persistence collaborator trait implemented by `veloz-api`
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod permission;
pub mod store;

pub use errors::CoreError;
pub use identity::Identity;
pub use permission::{Permission, PermissionSet};
