use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform success envelope wrapping every data-bearing response.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
#[serde(bound = "T: serde::Serialize + serde::de::DeserializeOwned")]
pub struct DataResponse<T> {
    /// Always true on this variant
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for operations that return no row, e.g. deletes.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// The uniform failure envelope.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Always false on this variant
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
