// Standalone
pub mod button;

// Overlay wrappers
pub mod alert_dialog;

// Depends on button and alert_dialog
pub mod action_button;

// Re-exports for convenience
pub use action_button::*;
pub use alert_dialog::*;
pub use button::*;
