//! Gallery input: raw key presses and clicks become [`Action`]s, and actions
//! become [`Transition`]s the UI layer applies to the scene host.
//!
//! # Invariants
//! - The desktop UI and the CLI share the same action set.
//! - Actions never touch the scene directly; they only update the selection
//!   and report what the host should do.

pub mod action;

pub use action::{Action, Transition, action_for_key, dispatch};

pub fn crate_info() -> &'static str {
    "gallery-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
