use serde::{Deserialize, Serialize};

/// Uniform response envelope
///
/// `code` mirrors the HTTP status of the response.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    /// Numeric status code, equal to the HTTP status
    pub code: u16,
    /// Human readable message
    pub message: String,
    /// Payload, `null` on most errors
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope carrying `data`
    pub fn ok(data: T) -> Self {
        Self::with_message("success", data)
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 200 envelope without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: None,
        }
    }
}

/// The response when an error occurs with an API request
///
/// `data` carries machine readable details such as dependent row counts.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    pub code: u16,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

/// One page of a paginated listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub list: Vec<T>,
}

/// Unpaginated listing with its length
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListDto<T> {
    pub total: u64,
    pub list: Vec<T>,
}

/// Optional `force` flag accepted by guarded deletes
#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForceQuery {
    pub force: Option<bool>,
}

/// Liveness probe response
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
}
