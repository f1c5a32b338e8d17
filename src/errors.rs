use crate::client::SubmitError;
use crate::models::ErrorBody;
use axum::{http::StatusCode, Json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        let message = err.to_string();
        match err {
            SubmitError::MissingFields(_) => Self::bad_request(message),
            SubmitError::Rejected { status, .. } => match StatusCode::from_u16(status) {
                Ok(status) if status.is_client_error() || status.is_server_error() => Self { status, message },
                _ => Self::bad_gateway(message),
            },
            SubmitError::Unreachable(_) | SubmitError::Malformed(_) => Self::bad_gateway(message),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let err = AppError::from(SubmitError::Rejected {
            status: 422,
            message: "bad input".into(),
        });
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "bad input");
    }

    #[test]
    fn blocked_submission_is_a_bad_request() {
        let err = AppError::from(SubmitError::MissingFields(vec!["Base Salary ($)"]));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Please fill in: Base Salary ($)");
    }

    #[test]
    fn odd_upstream_status_maps_to_bad_gateway() {
        let err = AppError::from(SubmitError::Rejected {
            status: 304,
            message: "Failed to calculate".into(),
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
