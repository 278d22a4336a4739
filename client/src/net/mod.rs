//! Networking and provider seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the auth-provider contract the UI consumes, `hosted` is the
//! browser adapter for the external auth service, and `types` holds the
//! shared wire schema.

pub mod auth;
#[cfg(feature = "hydrate")]
pub mod hosted;
pub mod types;
