//! HTTP client for the grade-record backend.

mod client;
mod error;

pub use client::{ApiClient, DEFAULT_API_BASE, RequestOptions, resolve_base_url, validate_base_url};
pub use error::{ApiError, ApiErrorKind};
