// Adapters layer: concrete implementations of the domain ports for the OS clipboard and terminal.

pub mod clipboard;
pub mod terminal;
