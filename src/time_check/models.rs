use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{config::config::DatabaseConfig, time_check::time_check_error::TimeCheckError};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body: body.into(),
        }
    }

    pub fn internal_error(body: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            body: body.into(),
        }
    }
}

impl From<TimeCheckError> for InvocationResponse {
    fn from(e: TimeCheckError) -> Self {
        Self::internal_error(e.to_string())
    }
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.body).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub query: Duration,
}

impl Timeouts {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            connect: config.connect_timeout(),
            query: config.query_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_status_code_key() {
        let response = InvocationResponse::ok("hello");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "statusCode": 200, "body": "hello" }));
    }

    #[test]
    fn maps_to_http_response() {
        let response = InvocationResponse::internal_error("nope").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
