//! Mapping of machine rejections onto HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value};

use crate::engine::MachineError;

/// Error response wrapper for handlers
#[derive(Debug)]
pub struct ApiError(pub MachineError);

impl From<MachineError> for ApiError {
    fn from(err: MachineError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(MachineError::MalformedRequest(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            MachineError::StatePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// JSON body: kind and message, plus one entry per violated precondition
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("status".to_string(), json!("error"));
        body.insert("kind".to_string(), json!(self.0.kind()));
        body.insert("kinds".to_string(), json!(self.0.kinds()));
        body.insert("message".to_string(), json!(self.0.to_string()));

        match &self.0 {
            MachineError::Unavailable(shortfalls) => {
                for shortfall in shortfalls {
                    body.insert(shortfall.status_key().to_string(), json!(shortfall.message()));
                }
            }
            MachineError::InvalidRecipeParameters(messages) => {
                body.insert("errors".to_string(), json!(messages));
            }
            _ => {}
        }

        Value::Object(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Shortfall;

    #[test]
    fn combined_shortfalls_list_every_status_key() {
        let err = ApiError(MachineError::Unavailable(vec![Shortfall::Milk, Shortfall::Clean]));
        let body = err.body();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "NotClean");
        assert_eq!(body["kinds"], json!(["NotClean", "InsufficientResources"]));
        assert!(body.get("statusMilk").is_some());
        assert!(body.get("statusClean").is_some());
        assert!(body.get("statusWater").is_none());
    }

    #[test]
    fn resource_only_shortfall_has_a_single_kind() {
        let body = ApiError(MachineError::Unavailable(vec![Shortfall::Water, Shortfall::Beans])).body();
        assert_eq!(body["kind"], "InsufficientResources");
        assert_eq!(body["kinds"], json!(["InsufficientResources"]));
    }

    #[test]
    fn poisoned_state_is_a_server_error() {
        let err = ApiError(MachineError::StatePoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let _ = err.into_response();
    }
}
