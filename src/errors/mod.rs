use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::ERR_VALIDATION_FAILED;
use crate::models::{Envelope, Meta};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable text placed in the envelope `message`.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::InternalServerError(message) => message.clone(),
            ApiError::ValidationError(errors) if errors.is_empty() => {
                ERR_VALIDATION_FAILED.to_string()
            }
            ApiError::ValidationError(errors) => {
                format!("{}: {}", ERR_VALIDATION_FAILED, errors.join("; "))
            }
        }
    }

    /// Bind the error to the request it failed, so it can render an envelope.
    pub fn at(self, req: &HttpRequest) -> RequestError {
        RequestError::new(self, Meta::from_request(req))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<mongodb::bson::document::ValueAccessError> for ApiError {
    fn from(err: mongodb::bson::document::ValueAccessError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::Unauthorized(err.to_string())
    }
}

/// An [`ApiError`] together with the metadata of the request that raised it.
///
/// This is what handlers and middleware return to actix; it renders the same
/// envelope as a success response, with `data: null`.
#[derive(Debug)]
pub struct RequestError {
    pub error: ApiError,
    pub meta: Meta,
}

impl RequestError {
    pub fn new(error: ApiError, meta: Meta) -> Self {
        Self { error, meta }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.meta.method, self.meta.url, self.error)
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::InternalServerError(_) = self.error {
            error!("{}", self);
        }
        Envelope::<()>::new(
            self.error.message(),
            None,
            self.error.status_code(),
            self.meta.clone(),
        )
        .into_response()
    }
}

/// `result.at(&req)?` inside handlers.
pub trait ResultExt<T> {
    fn at(self, req: &HttpRequest) -> Result<T, RequestError>;
}

impl<T> ResultExt<T> for Result<T, ApiError> {
    fn at(self, req: &HttpRequest) -> Result<T, RequestError> {
        self.map_err(|e| e.at(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::ValidationError(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_validation_message_joins_errors() {
        let error = ApiError::ValidationError(vec![
            "Price must not be negative".to_string(),
            "Quantity must not be negative".to_string(),
        ]);
        assert_eq!(
            error.message(),
            "Validation failed: Price must not be negative; Quantity must not be negative"
        );
    }

    #[actix_web::test]
    async fn test_error_renders_envelope() {
        let req = TestRequest::delete().uri("/products/12").to_http_request();
        let response = ApiError::NotFound("Product id 12 not found".to_string())
            .at(&req)
            .error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Product id 12 not found");
        assert!(json["data"].is_null());
        assert_eq!(json["meta"]["status"], "NOT_FOUND");
        assert_eq!(json["meta"]["method"], "DELETE");
    }
}
