#![allow(dead_code)]

use cors_negotiator::constants::method;
use cors_negotiator::{
    AnyOrigin, CorsDecision, CorsNegotiator, CorsOptions, OriginValidator, RequestContext,
};
use std::sync::Arc;

#[derive(Default)]
pub struct NegotiatorBuilder {
    reject_non_cors_requests: Option<bool>,
    origin_validator: Option<Arc<dyn OriginValidator>>,
    methods: Option<Vec<String>>,
    allowed_headers: Option<Vec<String>>,
    exposed_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl NegotiatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_non_cors_requests(mut self, enabled: bool) -> Self {
        self.reject_non_cors_requests = Some(enabled);
        self
    }

    pub fn origin_validator(mut self, validator: Arc<dyn OriginValidator>) -> Self {
        self.origin_validator = Some(validator);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> CorsNegotiator {
        let defaults = CorsOptions::default();

        CorsNegotiator::new(CorsOptions {
            reject_non_cors_requests: self
                .reject_non_cors_requests
                .unwrap_or(defaults.reject_non_cors_requests),
            origin_validator: Some(
                self.origin_validator
                    .unwrap_or_else(|| Arc::new(AnyOrigin)),
            ),
            allowed_methods: self.methods.unwrap_or(defaults.allowed_methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            allow_credentials: self.credentials.unwrap_or(defaults.allow_credentials),
            max_age_seconds: self.max_age.unwrap_or(defaults.max_age_seconds),
        })
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    host: Option<String>,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            host: Some("api.service.test".into()),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_context<R>(&self, f: impl FnOnce(&RequestContext<'_>) -> R) -> R {
        let ctx = RequestContext {
            method: &self.method,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        f(&ctx)
    }

    pub fn check(self, negotiator: &CorsNegotiator) -> CorsDecision {
        self.with_context(|ctx| negotiator.check(ctx))
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    host: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            host: Some("api.service.test".into()),
            ..Self::default()
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn with_context<R>(&self, f: impl FnOnce(&RequestContext<'_>) -> R) -> R {
        let ctx = RequestContext {
            method: method::OPTIONS,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        f(&ctx)
    }

    pub fn check(self, negotiator: &CorsNegotiator) -> CorsDecision {
        self.with_context(|ctx| negotiator.check(ctx))
    }
}

pub fn negotiator() -> NegotiatorBuilder {
    NegotiatorBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
