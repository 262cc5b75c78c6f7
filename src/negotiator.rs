use crate::constants::{header, status};
use crate::context::RequestContext;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::CorsPolicy;
use crate::request_info::CorsRequestInfo;
use crate::result::{
    CorsDecision, CorsResponse, Handled, PreflightResult, PreflightViolation, Rejection,
    SimpleResult,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Classifies requests and negotiates CORS response headers against a
/// shared [`CorsPolicy`].
#[derive(Clone, Debug)]
pub struct CorsNegotiator {
    policy: Arc<CorsPolicy>,
}

impl CorsNegotiator {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Ok(Self::from_policy(Arc::new(CorsPolicy::new(options)?)))
    }

    pub fn from_policy(policy: Arc<CorsPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let info = CorsRequestInfo::from_request(request);

        if !info.is_cors {
            if self.policy.rejects_non_cors_requests() {
                debug!(method = request.method, "CORS: rejecting non CORS request");
                return CorsDecision::Rejected(Rejection::NonCorsRequest);
            }
            debug!("CORS: non CORS request, passing through");
            return CorsDecision::PassThrough;
        }

        if !self
            .policy
            .origin_validator()
            .validate(&info.origin, request)
        {
            warn!(origin = %info.origin, "CORS: invalid origin");
            return CorsDecision::Rejected(Rejection::InvalidOrigin);
        }

        if info.is_preflight {
            self.evaluate_preflight(info)
        } else {
            self.evaluate_simple(info)
        }
    }

    /// Runs the decision and, when the request is not answered directly,
    /// invokes `next` exactly once.
    pub fn handle<T, F>(&self, request: &RequestContext<'_>, next: F) -> Handled<T>
    where
        F: FnOnce() -> T,
    {
        match self.check(request) {
            CorsDecision::PassThrough => Handled::Delegated {
                headers: Default::default(),
                response: next(),
            },
            CorsDecision::Simple(result) => Handled::Delegated {
                headers: result.headers,
                response: next(),
            },
            CorsDecision::Preflight(result) => Handled::Responded(CorsResponse::from(result)),
            CorsDecision::Rejected(rejection) => Handled::Responded(CorsResponse::from(rejection)),
        }
    }

    /// Asynchronous form of [`CorsNegotiator::handle`].
    pub async fn handle_async<T, F, Fut>(&self, request: &RequestContext<'_>, next: F) -> Handled<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.check(request) {
            CorsDecision::PassThrough => Handled::Delegated {
                headers: Default::default(),
                response: next().await,
            },
            CorsDecision::Simple(result) => Handled::Delegated {
                headers: result.headers,
                response: next().await,
            },
            CorsDecision::Preflight(result) => Handled::Responded(CorsResponse::from(result)),
            CorsDecision::Rejected(rejection) => Handled::Responded(CorsResponse::from(rejection)),
        }
    }

    fn evaluate_preflight(&self, info: CorsRequestInfo) -> CorsDecision {
        if !self
            .policy
            .allowed_methods()
            .allows_method(&info.requested_method)
        {
            warn!(
                origin = %info.origin,
                method = %info.requested_method,
                "CORS preflight: method not allowed"
            );
            return CorsDecision::Rejected(Rejection::InvalidPreflight(
                PreflightViolation::MethodNotAllowed {
                    requested_method: info.requested_method,
                },
            ));
        }

        if let Some(disallowed) = self
            .policy
            .allowed_headers()
            .first_disallowed(info.requested_headers.iter().map(String::as_str))
        {
            warn!(
                origin = %info.origin,
                header = disallowed,
                "CORS preflight: header not allowed"
            );
            return CorsDecision::Rejected(Rejection::InvalidPreflight(
                PreflightViolation::HeaderNotAllowed {
                    requested_header: disallowed.to_owned(),
                },
            ));
        }

        let mut headers = self.policy.preflight_headers().clone();
        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, info.origin);

        debug!("CORS preflight accepted");
        CorsDecision::Preflight(PreflightResult {
            headers,
            status: status::OK,
        })
    }

    fn evaluate_simple(&self, info: CorsRequestInfo) -> CorsDecision {
        let mut headers = self.policy.simple_headers().clone();
        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, info.origin);

        CorsDecision::Simple(SimpleResult { headers })
    }
}

#[cfg(test)]
#[path = "negotiator_test.rs"]
mod negotiator_test;
