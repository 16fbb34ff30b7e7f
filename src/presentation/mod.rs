/// Locale-style formatting for currency, quantities and timestamps
pub mod format;
/// Serde helpers for leniently-typed backend fields
pub mod serialization;
/// Terminal rendering target built on prettytable
pub mod terminal;
/// Renderer-agnostic view models
pub mod views;
/// The rendering-target abstraction the controller draws through
pub mod viewport;
