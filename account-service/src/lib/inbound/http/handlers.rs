use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::inbound::http::handlers::register::RegisterForm;

pub mod login;
pub mod logout;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    /// Structural validation failed; the submitted form is echoed back.
    InvalidForm(RegisterForm),
    /// The identity provider rejected the account; one message per rule.
    CreationFailed(Vec<String>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponseBody::new_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                )),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponseBody::new_error(StatusCode::BAD_REQUEST, message)),
            )
                .into_response(),
            ApiError::InvalidForm(form) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponseBody::new(StatusCode::BAD_REQUEST, form)),
            )
                .into_response(),
            ApiError::CreationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponseBody::new(
                    StatusCode::BAD_REQUEST,
                    ApiErrorList { errors },
                )),
            )
                .into_response(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UnknownCredential
            | AuthError::WrongPassword
            | AuthError::EmailTaken
            | AuthError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            AuthError::CreationFailed(errors) => ApiError::CreationFailed(errors),
            AuthError::Token(_) | AuthError::Database(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorList {
    pub errors: Vec<String>,
}
