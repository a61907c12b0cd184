use std::{error::Error, fmt::{Debug, Display}};

use actix_web::{error::{JsonPayloadError, PathError, QueryPayloadError}, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tokio::task::JoinError;

use crate::{services::ServiceError, utils::error_fmt_chain};

const INTERNAL_DESCRIPTION: &str = "internal server error";

/// Error returned by every handler. Serialised as
/// `{"errorCode": ..., "errorDescription": ...}` with a matching status.
pub struct ApiError{
    status: StatusCode,
    code: &'static str,
    description: String,
    cause: Option<anyhow::Error>
}

#[derive(Serialize)]
struct ErrorBody<'a>{
    #[serde(rename = "errorCode")]
    code: &'a str,
    #[serde(rename = "errorDescription")]
    description: &'a str
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, description: impl Into<String>) -> Self{
        Self{
            status,
            code,
            description: description.into(),
            cause: None
        }
    }

    pub fn bad_request(code: &'static str, description: impl Into<String>) -> Self{
        Self::new(StatusCode::BAD_REQUEST, code, description)
    }

    pub fn unauthorized(description: &str) -> Self{
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", description)
    }

    pub fn forbidden(description: &str) -> Self{
        Self::new(StatusCode::FORBIDDEN, "forbidden", description)
    }

    // The cause is kept for logs only, clients see a generic description
    pub fn internal(cause: anyhow::Error) -> Self{
        Self{
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internalError",
            description: INTERNAL_DESCRIPTION.to_string(),
            cause: Some(cause)
        }
    }

    pub fn code(&self) -> &'static str{
        self.code
    }

    pub fn description(&self) -> &str{
        &self.description
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        if self.status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        HttpResponse::build(self.status).json(ErrorBody{
            code: self.code,
            description: &self.description
        })
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidPayload(description) => Self::bad_request("invalidPayload", description),
            ServiceError::InvalidOrder(description) => Self::bad_request("invalidOrderPayload", description),
            ServiceError::InvalidEmail(description) => Self::bad_request("invalidEmail", description),
            ServiceError::InvalidPhoneNumber(description) => Self::bad_request("invalidPhoneNumber", description),
            ServiceError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "invalidCredentials", "email or password is incorrect")
            },
            ServiceError::NotFound(description) => Self::new(StatusCode::NOT_FOUND, "notFound", description),
            ServiceError::Conflict(description) => Self::new(StatusCode::CONFLICT, "conflict", description),
            ServiceError::InsufficientStock(description) => {
                Self::new(StatusCode::CONFLICT, "insufficientStock", description)
            },
            ServiceError::Unexpected(cause) => Self::internal(cause)
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        Self::internal(anyhow::Error::new(e).context("Failed due to threadpool error"))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error{
    ApiError::bad_request("invalidPayload", err.to_string()).into()
}

pub fn order_payload_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error{
    ApiError::bad_request("invalidOrderPayload", err.to_string()).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error{
    ApiError::bad_request("invalidParameter", err.to_string()).into()
}

pub fn order_id_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error{
    ApiError::bad_request("invalidOrderId", err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error{
    ApiError::bad_request("invalidParameter", err.to_string()).into()
}
