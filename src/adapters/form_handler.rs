//! HTTP handlers for the rendered form.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use crate::adapters::form_page::render_form_page;
use crate::config::Settings;
use crate::domain::FieldSchema;
use crate::render::render_table;

/// Shared state for form handlers
#[derive(Clone)]
pub struct FormState {
    pub settings: Arc<RwLock<Settings>>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// GET / - full page with the table mounted
pub async fn get_page(State(state): State<FormState>) -> impl IntoResponse {
    let settings = state.settings.read().await;

    match render_form_page(&settings) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render form page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /form - the bare table fragment
pub async fn get_fragment(State(state): State<FormState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    Html(render_table(&settings.schema()).to_string())
}

/// GET /api/schema - the resolved schema
pub async fn get_schema(State(state): State<FormState>) -> Json<ApiResponse<FieldSchema>> {
    let settings = state.settings.read().await;
    Json(ApiResponse::success(settings.schema()))
}
