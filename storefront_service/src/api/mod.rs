use anyhow::Context;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

pub mod chat;
pub mod context;
pub mod coupons;
pub mod customer_products;
pub mod customers;
pub mod error;
pub mod health;
pub mod products;
pub mod social_posts;
mod swagger;

use crate::api::context::AppState;

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let cors = cors_layer();

    let port = state.config.port;
    let app = api_router(state)
        .layer(cors.clone())
        .merge(health::router().layer(cors))
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(swagger::ApiDoc::openapi()) }),
        );

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("unable to bind service port")?;

    tracing::info!("storefront service is up and running on port {}", &port);

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// The dashboard frontend is served from another origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/customers", customers::router())
        .nest("/customer-products", customer_products::router())
        .nest("/coupons", coupons::router())
        .nest("/social-posts", social_posts::router())
        .nest("/chat", chat::router())
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::chat::{AdvisoryService, MockAdvisor};
    use crate::api::context::AppState;

    pub async fn test_router() -> Router {
        test_router_with(Arc::new(MockAdvisor)).await
    }

    pub async fn test_router_with(advisor: Arc<dyn AdvisoryService>) -> Router {
        let state = AppState::new_testing(advisor).await;
        super::api_router(state)
    }

    /// Drives one request through the router and decodes the JSON body.
    pub async fn send(
        api: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = api.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
