use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::quotes::{NewQuote, Quote, QuoteError, QuoteId};

use super::types::{CreateQuoteRequest, ErrorResponse, ListQuotesQuery};
use super::ApiState;

pub type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<T, ApiError>;

pub async fn create_quote(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "failed to decode quote request body");
        bad_request("Invalid request body")
    })?;

    let quote = NewQuote::from(request);
    if let Err(err) = quote.validate() {
        warn!(
            author_len = quote.author.len(),
            quote_len = quote.text.len(),
            error = %err,
            "rejected quote with missing fields"
        );
        debug!(author = %quote.author, quote = %quote.text, "rejected quote content");
        return Err(bad_request("Author and quote text are required"));
    }

    let created = state
        .quotes
        .add_quote(quote)
        .map_err(|err| internal_error("Failed to add quote", err))?;

    info!(id = created.id, "quote created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_quotes(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<ListQuotesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Quote>>> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection, "failed to decode quote list query");
        bad_request("Invalid query string")
    })?;

    let quotes = match query.author_filter() {
        Some(author) => state.quotes.quotes_by_author(author),
        None => state.quotes.all_quotes(),
    }
    .map_err(|err| internal_error("Failed to get quotes", err))?;

    Ok(Json(quotes))
}

pub async fn random_quote(State(state): State<Arc<ApiState>>) -> ApiResult<Response> {
    let quote = state
        .quotes
        .random_quote()
        .map_err(|err| internal_error("Failed to get random quote", err))?;

    Ok(match quote {
        Some(quote) => Json(quote).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

pub async fn delete_quote(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path.map_err(|rejection| {
        warn!(error = %rejection, "failed to decode quote id from path");
        bad_request("Invalid ID format")
    })?;

    let id = parse_quote_id(&raw_id).map_err(|message| {
        warn!(id_len = raw_id.len(), reason = message, "rejected quote id");
        bad_request(message)
    })?;

    match state.quotes.delete_quote(id) {
        Ok(()) => {
            info!(id, "quote deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) if err.is_not_found() => {
            warn!(id, "quote not found");
            Err(not_found("Quote not found"))
        }
        Err(err) => Err(internal_error("Failed to delete quote", err)),
    }
}

pub async fn health_check(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Value>> {
    let quotes = state
        .quotes
        .quote_count()
        .map_err(|err| internal_error("Quote store unavailable", err))?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "quoter",
        "quotes": quotes
    })))
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, path = %uri.path(), "no route matched");
    error_response(StatusCode::NOT_FOUND, format!("No route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {} is not allowed on {}", method, uri.path()),
    )
}

pub async fn handle_middleware_error(method: Method, uri: Uri, err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        warn!(%method, path = %uri.path(), "request timed out");
        return error_response(StatusCode::REQUEST_TIMEOUT, "Request timed out");
    }

    error!(%method, path = %uri.path(), error = %err, "unhandled middleware error");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Accepts only positive decimal integers, without surrounding whitespace.
pub fn parse_quote_id(raw: &str) -> Result<QuoteId, &'static str> {
    match raw.parse::<QuoteId>() {
        Ok(0) => Err("ID must be positive integer"),
        Ok(id) => Ok(id),
        Err(_) if raw.parse::<i64>().is_ok() => Err("ID must be positive integer"),
        Err(_) => Err("Invalid ID format"),
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(status, message)))
}

fn bad_request(message: &str) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, message)
}

fn not_found(message: &str) -> ApiError {
    error_response(StatusCode::NOT_FOUND, message)
}

fn internal_error(message: &str, err: QuoteError) -> ApiError {
    error!(error = %err, "quote API internal error");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
