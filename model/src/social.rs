use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// The social network a post targets.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, ToSchema, Debug, Clone, Copy, Display, EnumString, sqlx::Type,
)]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
}

/// Publication state of a post. New posts start as drafts.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, ToSchema, Debug, Clone, Copy, Display, EnumString, sqlx::Type,
)]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
}

/// A social post row left-joined with the optional product it promotes.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SocialPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub platform: Platform,
    /// Nulled by the store if the product is deleted
    pub product_id: Option<String>,
    pub image_url: Option<String>,
    /// Client-supplied schedule time, stored verbatim
    pub scheduled_at: Option<String>,
    pub posted_at: Option<String>,
    pub status: PostStatus,
    pub created_at: NaiveDateTime,
    pub product_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn platform_round_trips_lowercase() {
        assert_eq!(Platform::from_str("tiktok").unwrap(), Platform::Tiktok);
        assert_eq!(Platform::Linkedin.to_string(), "linkedin");
        assert!(Platform::from_str("myspace").is_err());
    }

    #[test]
    fn post_status_serializes_lowercase() {
        let json = serde_json::to_string(&PostStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
    }
}
