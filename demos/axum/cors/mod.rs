use std::sync::Arc;

use cors_negotiator::{AllowedOrigins, CorsNegotiator, CorsOptions, ValidationError};

pub type SharedNegotiator = Arc<CorsNegotiator>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedNegotiator,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions {
        reject_non_cors_requests: false,
        origin_validator: Some(Arc::new(AllowedOrigins::list(["http://localhost:3000"]))),
        allowed_methods: vec!["GET".into(), "POST".into()],
        allowed_headers: vec!["Content-Type".into(), "X-Requested-With".into()],
        exposed_headers: vec!["X-Demo-Trace".into()],
        allow_credentials: true,
        max_age_seconds: 600,
    };

    Ok(AppState {
        cors: Arc::new(CorsNegotiator::new(options)?),
        greeting: "Welcome to the axum CORS demo!",
    })
}

pub mod middleware;
