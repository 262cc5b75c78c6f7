use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// Successful preflight: a terminal response the wrapped handler never sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the negotiator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    PassThrough,
    Preflight(PreflightResult),
    Simple(SimpleResult),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightViolation {
    MethodNotAllowed { requested_method: String },
    HeaderNotAllowed { requested_header: String },
}

/// Request-scoped refusal. `Display` renders the plain-text response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Non CORS request")]
    NonCorsRequest,
    #[error("Invalid Origin")]
    InvalidOrigin,
    #[error("Invalid Preflight Request")]
    InvalidPreflight(PreflightViolation),
}

impl Rejection {
    pub fn status(&self) -> u16 {
        status::FORBIDDEN
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl From<Rejection> for CorsResponse {
    fn from(rejection: Rejection) -> Self {
        Self {
            status: rejection.status(),
            headers: Headers::new(),
            body: rejection.to_string(),
        }
    }
}

impl From<PreflightResult> for CorsResponse {
    fn from(result: PreflightResult) -> Self {
        Self {
            status: result.status,
            headers: result.headers,
            body: String::new(),
        }
    }
}

/// Outcome of [`crate::CorsNegotiator::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<T> {
    Responded(CorsResponse),
    /// The continuation ran. `headers` decorate its response and are empty
    /// for non-CORS requests.
    Delegated { headers: Headers, response: T },
}

impl<T> Handled<T> {
    pub fn is_delegated(&self) -> bool {
        matches!(self, Handled::Delegated { .. })
    }
}
