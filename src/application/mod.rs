/// The session controller driving fetches, trades and rendering
pub mod controller;
/// Service traits, one per backend surface
pub mod interfaces;
/// Wire models for the backend API
pub mod models;
/// Backend-facing service implementations
pub mod services;
/// Explicitly threaded session state
pub mod state;
