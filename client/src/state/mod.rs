//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `library`) so components depend
//! on small focused models.

pub mod auth;
pub mod library;
pub mod ui;
