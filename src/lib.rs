//! # formtable - schema-driven form tables
//!
//! formtable turns an ordered list of form-field descriptors into an HTML
//! `<table>` of labeled controls and mounts it into a page.
//!
//! ## Features
//!
//! - **Typed schema**: text, choice (radio/checkbox), select and textarea
//!   fields as a single sum type, loaded from TOML, YAML or JSON
//! - **Pure rendering**: `render_row` / `render_table` with no I/O
//! - **Pluggable mounting**: any [`application::RendererSink`]; pages are
//!   Tera templates with named containers
//! - **Validation**: schema invariants are checked when settings load
//! - **Live Reload**: the server picks up configuration changes
//!
//! ## Quick Start
//!
//! ```rust
//! use formtable::domain::{FieldDescriptor, FieldSchema, TextInputType};
//! use formtable::render::render_table;
//!
//! let schema = FieldSchema::new(vec![FieldDescriptor::text(
//!     "email",
//!     "Email",
//!     TextInputType::Email,
//!     "you@example.com",
//! )]);
//!
//! let table = render_table(&schema);
//! assert_eq!(table.len(), 1);
//! assert!(table.to_string().starts_with("<table><tr>"));
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: field descriptors and built-in presets
//! - **Render**: markup tree and the row/table renderer
//! - **Application**: the sink port and the page use case
//! - **Adapters**: pages, sinks and HTTP handlers
//! - **Config**: configuration loading, validation and reload

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod render;

use crate::adapters::form_handler::{self, FormState};
use crate::adapters::health_handler::HealthHandler;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings, shared with the config watcher
/// * `health_handler` - Health check handler
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(settings: Arc<RwLock<config::Settings>>, health_handler: Arc<HealthHandler>) -> Router {
    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let form_router = Router::new()
        .route("/", get(form_handler::get_page))
        .route("/form", get(form_handler::get_fragment))
        .route("/api/schema", get(form_handler::get_schema))
        .with_state(FormState { settings });

    health_router.merge(form_router).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
