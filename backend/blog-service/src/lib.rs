/// Blog Service Library
///
/// Serves the reader-facing side of the blog: paginated post listings,
/// permalink detail pages with moderated comments, comment submission and
/// "recommend this post" emails.
///
/// # Modules
///
/// - `handlers`: Blog HTTP request handlers
/// - `routes`: Route table for the handlers
/// - `models`: Data structures for posts and comments
/// - `forms`: Submitted form data and validation
/// - `services`: Business logic layer
/// - `db`: Store trait and PostgreSQL implementation
/// - `render`: Response rendering
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use config::BlogConfig;
use db::BlogStore;
use render::Renderer;
use services::Mailer;
use std::sync::Arc;

/// Shared handler state; every collaborator sits behind a trait object.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub mailer: Arc<dyn Mailer>,
    pub renderer: Arc<dyn Renderer>,
    pub blog: BlogConfig,
}
