//! Response envelope shared by every endpoint.
//!
//! Every body has the shape `{ "success": bool, "message"?: string, "data"?: T }`.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` bodies.

use poetry_core::pagination::Pagination;
use poetry_core::types::DbId;
use serde::Serialize;

/// Standard `{ success, message, data }` envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Successful response carrying `data` and a message.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failed response with only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Payload of a paged list: `{ list, pagination }`.
#[derive(Debug, Serialize)]
pub struct PageData<T: Serialize> {
    pub list: Vec<T>,
    pub pagination: Pagination,
}

/// Payload returned on creation: `{ id }`.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: DbId,
}
