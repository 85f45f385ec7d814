use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use formtable::adapters::health_handler::HealthHandler;
use formtable::config::{PageSettings, ServerSettings, Settings};
use formtable::domain::presets::Preset;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

fn app_with(page: PageSettings, preset: Option<Preset>) -> Router {
    let settings = Arc::new(RwLock::new(Settings {
        preset,
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        page,
        fields: preset
            .map(|p| p.schema().fields().to_vec())
            .unwrap_or_default(),
    }));
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    formtable::create_app(settings, health_handler)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_page_endpoint() {
    let app = app_with(PageSettings::default(), Some(Preset::Contact));

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"<div id="form"><table>"#));
    assert_eq!(body.matches("<tr>").count(), 8);
    assert!(body.contains(r#"<label for="contact-2">どちらでも可</label>"#));
}

#[tokio::test]
async fn test_page_endpoint_missing_target() {
    let page = PageSettings {
        mount_target: "missing".to_string(),
        ..PageSettings::default()
    };
    let app = app_with(page, Some(Preset::Contact));

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_fragment_endpoint() {
    let app = app_with(PageSettings::default(), None);

    let (status, body) = get(app, "/form").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<table></table>");
}

#[tokio::test]
async fn test_schema_endpoint() {
    let app = app_with(PageSettings::default(), Some(Preset::Contact));

    let (status, body) = get(app, "/api/schema").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
    let fields = body["data"].as_array().unwrap();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields[4]["name"], "contact");
    assert_eq!(fields[4]["kind"], "choice");
    assert_eq!(fields[4]["input_type"], "radio");
    assert_eq!(fields[7]["kind"], "textarea");
}

#[tokio::test]
async fn test_health_endpoints() {
    let (status, body) = get(app_with(PageSettings::default(), None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["fields"], 0);

    let (status, _) = get(app_with(PageSettings::default(), None), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = get(app_with(PageSettings::default(), Some(Preset::Contact)), "/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app_with(PageSettings::default(), None), "/health/live").await;
    assert_eq!(status, StatusCode::OK);
}
