//! Uniform response envelope returned by every endpoint.
//!
//! ```json
//! { "message": "...", "data": { ... } | null,
//!   "meta": { "status": "OK", "method": "GET", "url": "http://host/categories",
//!             "totalPages": 3, "totalElements": 21, "pageNumber": 1, "pageSize": 10 } }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Serialize, Serializer};

use crate::models::Page;

/// HTTP status rendered by its reason phrase, e.g. `NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus(pub StatusCode);

impl ResponseStatus {
    pub fn name(&self) -> String {
        match self.0.canonical_reason() {
            Some(reason) => reason.to_uppercase().replace(|c: char| c == ' ' || c == '-', "_"),
            None => self.0.as_str().to_string(),
        }
    }
}

impl Serialize for ResponseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Request metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub status: ResponseStatus,
    pub method: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    /// 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl Meta {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus(StatusCode::OK),
            method: method.into(),
            url: url.into(),
            total_pages: None,
            total_elements: None,
            page_number: None,
            page_size: None,
        }
    }

    /// Method and URL (without query string) of the current request.
    pub fn from_request(req: &HttpRequest) -> Self {
        let url = {
            let info = req.connection_info();
            format!("{}://{}{}", info.scheme(), info.host(), req.path())
        };
        Self::new(req.method().as_str(), url)
    }

    /// Attach pagination totals; the page number is reported 1-based.
    pub fn with_page<T>(self, page: &Page<T>) -> Self {
        Self {
            total_pages: Some(page.total_pages()),
            total_elements: Some(page.total_elements),
            page_number: Some(page.number + 1),
            page_size: Some(page.size),
            ..self
        }
    }
}

/// `{ message, data, meta }` body shared by success and error responses.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Meta,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: impl Into<String>, data: Option<T>, status: StatusCode, meta: Meta) -> Self {
        Self {
            message: message.into(),
            data,
            meta: Meta {
                status: ResponseStatus(status),
                ..meta
            },
        }
    }

    pub fn ok(message: &str, data: T, req: &HttpRequest) -> Self {
        Self::new(message, Some(data), StatusCode::OK, Meta::from_request(req))
    }

    pub fn created(message: &str, data: T, req: &HttpRequest) -> Self {
        Self::new(message, Some(data), StatusCode::CREATED, Meta::from_request(req))
    }

    pub fn status(&self) -> StatusCode {
        self.meta.status.0
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self)
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// List response carrying the page content and its totals.
    pub fn page(message: &str, page: Page<T>, req: &HttpRequest) -> Self {
        let meta = Meta::from_request(req).with_page(&page);
        Self::new(message, Some(page.content), StatusCode::OK, meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageRequest;
    use actix_web::test::TestRequest;

    #[test]
    fn test_status_names() {
        assert_eq!(ResponseStatus(StatusCode::OK).name(), "OK");
        assert_eq!(ResponseStatus(StatusCode::CREATED).name(), "CREATED");
        assert_eq!(ResponseStatus(StatusCode::NOT_FOUND).name(), "NOT_FOUND");
        assert_eq!(ResponseStatus(StatusCode::BAD_REQUEST).name(), "BAD_REQUEST");
    }

    #[test]
    fn test_envelope_without_pagination() {
        let meta = Meta::new("GET", "http://localhost:8080/categories/1");
        let envelope = Envelope::new("found", Some(1), StatusCode::OK, meta);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["message"], "found");
        assert_eq!(json["data"], 1);
        assert_eq!(json["meta"]["status"], "OK");
        assert_eq!(json["meta"]["method"], "GET");
        assert!(json["meta"].get("totalPages").is_none());
        assert!(json["meta"].get("pageNumber").is_none());
    }

    #[test]
    fn test_envelope_null_data() {
        let meta = Meta::new("DELETE", "http://localhost:8080/products/9");
        let envelope = Envelope::<()>::new("gone", None, StatusCode::NOT_FOUND, meta);
        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json["data"].is_null());
        assert_eq!(json["meta"]["status"], "NOT_FOUND");
    }

    #[test]
    fn test_page_meta_is_one_based() {
        let req = TestRequest::get().uri("/categories?page=2&size=5").to_http_request();
        let page = Page::new(vec!["a", "b"], PageRequest::new(1, 5), 7);
        let envelope = Envelope::page("listed", page, &req);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["meta"]["pageNumber"], 2);
        assert_eq!(json["meta"]["pageSize"], 5);
        assert_eq!(json["meta"]["totalPages"], 2);
        assert_eq!(json["meta"]["totalElements"], 7);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert!(json["meta"]["url"].as_str().unwrap().ends_with("/categories"));
    }
}
