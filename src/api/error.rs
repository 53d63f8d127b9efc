use crate::api::schemas::ErrorResponse;
use crate::rpc::{Code, RpcStatus};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error surfaced by a gateway handler
#[derive(Debug)]
pub struct ApiError(pub RpcStatus);

impl ApiError {
    pub fn http_status(&self) -> StatusCode {
        match self.0.code {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<RpcStatus> for ApiError {
    fn from(status: RpcStatus) -> Self {
        Self(status)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(RpcStatus::invalid_argument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = ErrorResponse {
            code: self.0.code.as_i32(),
            message: self.0.message,
            details: Vec::new(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_maps_to_an_error_status() {
        let cases = [
            (Code::InvalidArgument, StatusCode::BAD_REQUEST),
            (Code::NotFound, StatusCode::NOT_FOUND),
            (Code::Internal, StatusCode::INTERNAL_SERVER_ERROR),
            (Code::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (code, expected) in cases {
            let err = ApiError(RpcStatus::new(code, "failed"));
            assert_eq!(err.http_status(), expected);
            assert!(!expected.is_success());
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
