//! Configuration for the quickdo binary.

/// Keybindings configuration.
pub mod keybindings;

pub use keybindings::KeyBindingsConfig;
