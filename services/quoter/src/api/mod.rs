use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    middleware,
    routing::{delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::quotes::QuoteService;

pub mod handlers;
mod request_log;
pub mod types;

pub use handlers::{
    create_quote, delete_quote, health_check, list_quotes, parse_quote_id, random_quote,
};
pub use request_log::{log_requests, set_request_id, REQUEST_ID_HEADER};
pub use types::{CreateQuoteRequest, ErrorResponse, ListQuotesQuery};

pub struct ApiState {
    pub quotes: QuoteService,
}

impl ApiState {
    pub fn new(quotes: QuoteService) -> Self {
        Self { quotes }
    }
}

pub fn create_router(state: Arc<ApiState>, request_timeout: Duration) -> Router {
    let timeout = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handlers::handle_middleware_error))
        .timeout(request_timeout);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    Router::new()
        .route(
            "/quotes",
            get(list_quotes)
                .post(create_quote)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/quotes/random",
            get(random_quote).fallback(handlers::method_not_allowed),
        )
        .route(
            "/quotes/:id",
            delete(delete_quote).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(health_check).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(timeout)
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn(set_request_id))
        .layer(trace)
}
