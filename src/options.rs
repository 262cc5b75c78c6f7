use crate::allowed_methods::default_methods;
use crate::origin::OriginValidator;
use crate::util::is_http_token;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone)]
pub struct CorsOptions {
    pub reject_non_cors_requests: bool,
    pub origin_validator: Option<Arc<dyn OriginValidator>>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            reject_non_cors_requests: false,
            origin_validator: None,
            allowed_methods: default_methods(),
            allowed_headers: Vec::new(),
            exposed_headers: Vec::new(),
            allow_credentials: false,
            max_age_seconds: 0,
        }
    }
}

impl fmt::Debug for CorsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsOptions")
            .field("reject_non_cors_requests", &self.reject_non_cors_requests)
            .field(
                "origin_validator",
                &self.origin_validator.as_ref().map(|_| "<validator>"),
            )
            .field("allowed_methods", &self.allowed_methods)
            .field("allowed_headers", &self.allowed_headers)
            .field("exposed_headers", &self.exposed_headers)
            .field("allow_credentials", &self.allow_credentials)
            .field("max_age_seconds", &self.max_age_seconds)
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an origin validator is required for CORS configuration")]
    MissingOriginValidator,
    #[error("allowed method `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("exposed header `{0}` is not a valid HTTP header name")]
    InvalidExposedHeader(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origin_validator.is_none() {
            return Err(ValidationError::MissingOriginValidator);
        }

        if let Some(method) = Self::first_invalid_token(&self.allowed_methods) {
            return Err(ValidationError::InvalidMethod(method));
        }

        if let Some(name) = Self::first_invalid_token(&self.allowed_headers) {
            return Err(ValidationError::InvalidHeaderName(name));
        }

        if let Some(name) = Self::first_invalid_token(&self.exposed_headers) {
            return Err(ValidationError::InvalidExposedHeader(name));
        }

        Ok(())
    }

    fn first_invalid_token(values: &[String]) -> Option<String> {
        values
            .iter()
            .find(|value| !is_http_token(value.trim()))
            .cloned()
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
