//! Input validation producing [`RequestError::Validation`].
//!
//! Every write path validates here before touching the database. Lengths are counted
//! in Unicode scalar values so names in any script get the same limits.

use crate::server::error::request::RequestError;

/// Largest page size accepted by paginated listings
pub const MAX_PAGE_SIZE: u64 = 100;
pub static DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page whose row offset still fits a signed 64-bit SQL offset
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Trims `value` and checks its length lies in `min..=max`
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<String, RequestError> {
    let value = value.trim();
    let len = value.chars().count();

    if len < min || len > max {
        let message = if min == 0 {
            format!("{} must be at most {} characters", field, max)
        } else {
            format!("{} must be {}-{} characters", field, min, max)
        };
        return Err(RequestError::Validation(message));
    }

    Ok(value.to_string())
}

/// Checks a score is finite and within 0-100
pub fn score(field: &str, value: f64) -> Result<f64, RequestError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(RequestError::Validation(format!(
            "{} must be between 0 and 100",
            field
        )));
    }

    Ok(value)
}

/// Checks a score ratio is finite and within 0-1
pub fn ratio(value: f64) -> Result<f64, RequestError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(RequestError::Validation(
            "scoreRatio must be between 0 and 1".to_string(),
        ));
    }

    Ok(value)
}

/// Normalizes a 1-5 rating where 0 or absent means the neutral 3
pub fn rating(field: &str, value: Option<i32>) -> Result<u8, RequestError> {
    match value {
        None | Some(0) => Ok(3),
        Some(v @ 1..=5) => Ok(v as u8),
        Some(_) => Err(RequestError::Validation(format!(
            "{} must be between 1 and 5",
            field
        ))),
    }
}

/// Resolves 1-based `page` and `page_size`, applying defaults
pub fn pagination(page: Option<u64>, page_size: Option<u64>) -> Result<(u64, u64), RequestError> {
    let page = page.unwrap_or(1);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page < 1 || page > MAX_PAGE {
        return Err(RequestError::Validation(format!(
            "page must be between 1 and {}",
            MAX_PAGE
        )));
    }
    if page_size < 1 || page_size > MAX_PAGE_SIZE {
        return Err(RequestError::Validation(format!(
            "pageSize must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }

    Ok((page, page_size))
}

/// Whether a `sortOrder` parameter asks for descending order
pub fn descending(sort_order: Option<&str>, default: bool) -> Result<bool, RequestError> {
    match sort_order.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(default),
        Some("asc") => Ok(false),
        Some("desc") => Ok(true),
        Some(_) => Err(RequestError::Validation(
            "sortOrder must be asc or desc".to_string(),
        )),
    }
}
