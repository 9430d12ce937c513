use utoipa::OpenApi;

use model::chat::ChatMessage;
use model::coupon::Coupon;
use model::customer::{Customer, CustomerWithPurchases};
use model::customer_product::CustomerProduct;
use model::product::Product;
use model::response::{ErrorResponse, MessageResponse};
use model::social::{Platform, PostStatus, SocialPost};

use super::{chat, coupons, customer_products, customers, health, products, social_posts};

#[derive(OpenApi)]
#[openapi(
        paths(
            products::get_products::handler,
            products::create_product::handler,
            products::get_product::handler,
            products::update_product::handler,
            products::delete_product::handler,
            customers::get_customers::handler,
            customers::create_customer::handler,
            customers::get_customer::handler,
            customers::update_customer::handler,
            customers::delete_customer::handler,
            customer_products::get_customer_products::handler,
            customer_products::create_customer_product::handler,
            coupons::get_coupons::handler,
            coupons::create_coupon::handler,
            coupons::update_coupon::handler,
            coupons::delete_coupon::handler,
            social_posts::get_social_posts::handler,
            social_posts::create_social_post::handler,
            social_posts::update_social_post::handler,
            social_posts::delete_social_post::handler,
            chat::get_messages::handler,
            chat::post_message::handler,
            health::health_handler,
        ),
        components(
            schemas(
                Product,
                Customer,
                CustomerWithPurchases,
                CustomerProduct,
                Coupon,
                SocialPost,
                Platform,
                PostStatus,
                ChatMessage,
                MessageResponse,
                ErrorResponse,
            ),
        ),
        tags(
            (name = "storefront service", description = "Ecommerce administration API")
        )
    )]
pub struct ApiDoc;
