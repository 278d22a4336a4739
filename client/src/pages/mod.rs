//! Page modules for the session gate's screens and the shell's views.
//!
//! ARCHITECTURE
//! ============
//! `loading`, `sign_in`, and `shell` are the three gate screens. The four
//! remaining modules are the views the shell switches between; they take no
//! props and fetch nothing.

pub mod dashboard;
pub mod library;
pub mod loading;
pub mod search;
pub mod shell;
pub mod sign_in;
pub mod upload;
