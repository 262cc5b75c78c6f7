use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_negotiator::{CorsDecision, CorsResponse, Headers, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::PassThrough => next.run(request).await,
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            decorate(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Preflight(result) => into_response(result.into()),
        CorsDecision::Rejected(rejection) => into_response(rejection.into()),
    }
}

fn into_response(cors: CorsResponse) -> Response {
    let mut response = Response::new(Body::from(cors.body));
    *response.status_mut() = StatusCode::from_u16(cors.status).unwrap_or(StatusCode::FORBIDDEN);
    append_headers(response.headers_mut(), &cors.headers);
    response
}

/// Adds CORS headers the handler did not set itself.
fn decorate(map: &mut HeaderMap, headers: &Headers) {
    for name in headers.names() {
        if map.contains_key(name) {
            continue;
        }
        let Ok(header_name) = HeaderName::try_from(name) else {
            continue;
        };
        for value in headers.get(name).unwrap_or_default() {
            if let Ok(header_value) = HeaderValue::from_str(value) {
                map.append(header_name.clone(), header_value);
            }
        }
    }
}

fn append_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.append(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    host: Option<String>,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            host: header_value(headers, header::HOST),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: joined_header_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            host: self.host.as_deref(),
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn joined_header_values(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
