use axum::{
    Router,
    routing::{get, post},
};

pub mod create_customer_product;
pub mod get_customer_products;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_customer_products::handler))
        .route("/", post(create_customer_product::handler))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_util::{send, test_router};

    #[tokio::test]
    async fn create_requires_both_references() {
        let api = test_router().await;
        let (status, body) = send(
            &api,
            "POST",
            "/customer-products",
            Some(json!({"customer_id": "c1"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Customer ID and Product ID are required");
    }

    #[tokio::test]
    async fn dangling_references_are_a_bad_request() {
        let api = test_router().await;
        let (status, body) = send(
            &api,
            "POST",
            "/customer-products",
            Some(json!({"customer_id": "ghost", "product_id": "ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Customer or product does not exist");
    }

    #[tokio::test]
    async fn create_and_list_round_trip() {
        let api = test_router().await;

        let (_, body) = send(
            &api,
            "POST",
            "/customers",
            Some(json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        let customer_id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, body) = send(
            &api,
            "POST",
            "/products",
            Some(json!({"name": "Mug", "price": 12.5})),
        )
        .await;
        let product_id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &api,
            "POST",
            "/customer-products",
            Some(json!({
                "customer_id": customer_id,
                "product_id": product_id,
                "quantity": 3
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["quantity"], 3);
        assert_eq!(body["data"]["customer_name"], "Ada");
        assert_eq!(body["data"]["product_name"], "Mug");

        let (status, body) = send(&api, "GET", "/customer-products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
