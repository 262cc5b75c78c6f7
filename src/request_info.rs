use crate::case::{canonical_header_key, normalize_method};
use crate::constants::method;
use crate::context::RequestContext;
use crate::util::split_header_list;
use indexmap::IndexSet;
use url::Url;

const NULL_ORIGIN: &str = "null";

/// CORS-relevant classification of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsRequestInfo {
    pub is_cors: bool,
    pub is_preflight: bool,
    pub origin: String,
    pub requested_method: String,
    pub requested_headers: IndexSet<String>,
}

impl CorsRequestInfo {
    pub fn from_request(request: &RequestContext<'_>) -> Self {
        let origin = request.origin.unwrap_or_default();
        if !Self::is_cross_origin(origin, request.host) {
            return Self::default();
        }

        let requested_method = request
            .access_control_request_method
            .map(normalize_method)
            .unwrap_or_default();

        let requested_headers = request
            .access_control_request_headers
            .map(|value| split_header_list(value).map(canonical_header_key).collect())
            .unwrap_or_default();

        let is_preflight =
            request.method.eq_ignore_ascii_case(method::OPTIONS) && !requested_method.is_empty();

        Self {
            is_cors: true,
            is_preflight,
            origin: origin.to_owned(),
            requested_method,
            requested_headers,
        }
    }

    fn is_cross_origin(origin: &str, host: Option<&str>) -> bool {
        if origin.is_empty() {
            return false;
        }
        if origin == NULL_ORIGIN {
            return true;
        }

        if Url::parse(origin).is_err() {
            return false;
        }

        match host {
            Some(host) => !Self::authority(origin).eq_ignore_ascii_case(host.trim()),
            None => true,
        }
    }

    /// `host[:port]` exactly as written in the origin, default ports included.
    fn authority(origin: &str) -> &str {
        let Some((_, rest)) = origin.split_once("://") else {
            return "";
        };
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        &rest[..end]
    }
}

#[cfg(test)]
#[path = "request_info_test.rs"]
mod request_info_test;
