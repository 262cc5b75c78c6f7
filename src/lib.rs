//! CORS request classification and response-header negotiation.
//!
//! A [`CorsNegotiator`] classifies each request as non-CORS, preflight or an
//! actual cross-origin request, checks the `Origin` with a pluggable
//! [`OriginValidator`] and yields either the headers to attach or a 403
//! [`Rejection`].

mod allowed_headers;
mod allowed_methods;
mod case;
pub mod constants;
mod context;
mod exposed_headers;
mod headers;
mod negotiator;
mod options;
pub mod origin;
mod policy;
mod request_info;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::{AllowedMethods, default_methods};
pub use case::{canonical_header_key, normalize_method};
pub use context::RequestContext;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use negotiator::CorsNegotiator;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, AnyOrigin, OriginMatcher, OriginValidator, PatternError};
pub use policy::CorsPolicy;
pub use request_info::CorsRequestInfo;
pub use result::{
    CorsDecision, CorsResponse, Handled, PreflightResult, PreflightViolation, Rejection,
    SimpleResult,
};
