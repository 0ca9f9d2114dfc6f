//! Domain layer: core entities and UI state containers.

pub mod composer_state;
pub mod conversation_state;
pub mod events;
pub mod message;
pub mod shell_state;
pub mod theme;
pub mod thread;
pub mod thread_list_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
