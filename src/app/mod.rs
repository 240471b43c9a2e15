//! Application layer.
//!
//! # Structure
//!
//! - `chart` - Request/response payloads, chart URL validation, values parsing
//! - `client` - HTTP client for the rendering service
//! - `render_controller` - Submit flow, in-flight guard, values back-fill
//! - `syntax` - YAML highlighting of the output pane
//! - `settings` - Persisted configuration
//! - `state.rs` - Main application coordinator

pub mod chart;
pub mod client;
pub mod error;
pub mod messages;
pub mod render_controller;
pub mod settings;
pub mod state;
pub mod syntax;

// Re-exports for convenient external access
pub use chart::{TemplateRequest, TemplateResponse};
pub use client::TemplateClient;
pub use error::AppError;
pub use messages::{Message, RenderOutcome};
pub use settings::{AppSettings, ThemeMode};
