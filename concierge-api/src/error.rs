use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use concierge_reservations::ServiceFault;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    Upstream(ServiceFault),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            // Already logged once by the adapter.
            AppError::Upstream(fault) => {
                let body = Json(json!({
                    "error": fault.to_string(),
                    "activityId": fault.activity_id,
                    "operation": fault.operation.to_string(),
                }));
                (StatusCode::BAD_GATEWAY, body).into_response()
            }
        }
    }
}

impl From<ServiceFault> for AppError {
    fn from(fault: ServiceFault) -> Self {
        Self::Upstream(fault)
    }
}
