use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::exposed_headers::ExposedHeaders;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginValidator;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Validated, immutable CORS policy shared by every request.
pub struct CorsPolicy {
    reject_non_cors_requests: bool,
    origin_validator: Arc<dyn OriginValidator>,
    allowed_methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: ExposedHeaders,
    allow_credentials: bool,
    max_age_seconds: u64,
    preflight_template: OnceCell<Headers>,
    simple_template: OnceCell<Headers>,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        let CorsOptions {
            reject_non_cors_requests,
            origin_validator,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            allow_credentials,
            max_age_seconds,
        } = options;

        let origin_validator = origin_validator.ok_or(ValidationError::MissingOriginValidator)?;

        Ok(Self {
            reject_non_cors_requests,
            origin_validator,
            allowed_methods: AllowedMethods::list(allowed_methods),
            allowed_headers: AllowedHeaders::list(allowed_headers),
            exposed_headers: ExposedHeaders::list(exposed_headers),
            allow_credentials,
            max_age_seconds,
            preflight_template: OnceCell::new(),
            simple_template: OnceCell::new(),
        })
    }

    pub fn rejects_non_cors_requests(&self) -> bool {
        self.reject_non_cors_requests
    }

    pub fn origin_validator(&self) -> &dyn OriginValidator {
        self.origin_validator.as_ref()
    }

    pub fn allowed_methods(&self) -> &AllowedMethods {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn allows_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age_seconds(&self) -> u64 {
        self.max_age_seconds
    }

    pub(crate) fn preflight_headers(&self) -> &Headers {
        self.preflight_template.get_or_init(|| {
            let mut headers = Headers::with_capacity(5);
            for method in self.allowed_methods.iter() {
                headers.append(header::ACCESS_CONTROL_ALLOW_METHODS, method);
            }
            for name in self.allowed_headers.iter() {
                headers.append(header::ACCESS_CONTROL_ALLOW_HEADERS, name);
            }
            if self.allow_credentials {
                headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            }
            headers.set(
                header::ACCESS_CONTROL_MAX_AGE,
                self.max_age_seconds.to_string(),
            );
            headers
        })
    }

    pub(crate) fn simple_headers(&self) -> &Headers {
        self.simple_template.get_or_init(|| {
            let mut headers = Headers::with_capacity(3);
            for name in self.exposed_headers.iter() {
                headers.append(header::ACCESS_CONTROL_EXPOSE_HEADERS, name.as_str());
            }
            if self.allow_credentials {
                headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            }
            headers
        })
    }
}

impl fmt::Debug for CorsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsPolicy")
            .field("reject_non_cors_requests", &self.reject_non_cors_requests)
            .field("allowed_methods", &self.allowed_methods)
            .field("allowed_headers", &self.allowed_headers)
            .field("exposed_headers", &self.exposed_headers)
            .field("allow_credentials", &self.allow_credentials)
            .field("max_age_seconds", &self.max_age_seconds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
