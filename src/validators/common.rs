//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, ERR_INVALID_PAGE, ERR_INVALID_PAGE_SIZE, MAX_PAGE_SIZE,
};
use crate::errors::ApiError;
use crate::models::{PageQuery, PageRequest};

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
///
/// # Example
/// ```ignore
/// category.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .collect();
    // field_errors() is a HashMap; keep messages stable for callers
    errors.sort();
    ApiError::ValidationError(errors)
}

/// Turn 1-based `?page=&size=` into a 0-based store request.
///
/// Missing values fall back to page 1 and size 10; size is capped at 100.
pub fn page_request_from_query(query: &PageQuery) -> Result<PageRequest, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER as i64);
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE as i64);

    if page < 1 {
        return Err(ApiError::BadRequest(ERR_INVALID_PAGE.to_string()));
    }
    if size < 1 {
        return Err(ApiError::BadRequest(ERR_INVALID_PAGE_SIZE.to_string()));
    }

    Ok(PageRequest::new(page as u64 - 1, (size as u64).min(MAX_PAGE_SIZE)))
}
