//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props; pages own state and pass
//! values and callbacks down.

pub mod form_input;
