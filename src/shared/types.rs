use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

/// Body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            error,
            errors,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    /// Success response for a list, with the item count in `meta`
    pub fn list(items: T, len: usize) -> Self {
        Self::success(
            Some(items),
            None,
            Some(Meta {
                total: len as i64,
            }),
        )
    }
}
