use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod get_customers;
pub mod update_customer;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_customers::handler))
        .route("/", post(create_customer::handler))
        .route("/:customer_id", get(get_customer::handler))
        .route("/:customer_id", put(update_customer::handler))
        .route("/:customer_id", delete(delete_customer::handler))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_util::{send, test_router};

    #[tokio::test]
    async fn create_requires_name_and_email() {
        let api = test_router().await;
        let (status, body) = send(&api, "POST", "/customers", Some(json!({"name": "Ada"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name and email are required");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_bad_request() {
        let api = test_router().await;

        let (status, _) = send(
            &api,
            "POST",
            "/customers",
            Some(json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &api,
            "POST",
            "/customers",
            Some(json!({"name": "Imposter", "email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email already exists");

        let (_, body) = send(&api, "GET", "/customers", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_customer_returns_purchase_aggregates() {
        let api = test_router().await;

        let (_, body) = send(
            &api,
            "POST",
            "/customers",
            Some(json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        let customer_id = body["data"]["id"].as_str().unwrap().to_string();

        let mut product_ids = Vec::new();
        for name in ["Mug", "Shirt"] {
            let (_, body) = send(
                &api,
                "POST",
                "/products",
                Some(json!({"name": name, "price": 5.0})),
            )
            .await;
            product_ids.push(body["data"]["id"].as_str().unwrap().to_string());
        }

        for product_id in &product_ids {
            let (status, _) = send(
                &api,
                "POST",
                "/customer-products",
                Some(json!({"customer_id": customer_id, "product_id": product_id})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&api, "GET", &format!("/customers/{customer_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total_purchases"], 2);
        let purchased = body["data"]["purchased_products"].as_str().unwrap();
        assert!(purchased.contains("Mug"));
        assert!(purchased.contains("Shirt"));
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let api = test_router().await;

        let (_, body) = send(
            &api,
            "POST",
            "/customers",
            Some(json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &api,
            "PUT",
            &format!("/customers/{id}"),
            Some(json!({"name": "Ada L.", "email": "ada@example.com", "phone": "555-1234"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Ada L.");
        assert_eq!(body["data"]["phone"], "555-1234");

        let (status, body) = send(&api, "DELETE", &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer deleted successfully");

        let (status, _) = send(&api, "GET", &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
