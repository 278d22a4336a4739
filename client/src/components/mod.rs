//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`button`, `card`, `icon`) carry no state; `sidebar` reads and
//! writes the shared state provided by `App`.

pub mod button;
pub mod card;
pub mod icon;
pub mod sidebar;
