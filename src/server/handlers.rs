use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::feedback::{self, FeedbackReceipt, FeedbackRequest};
use crate::gazetteer::{
    parse_coordinate, Directions, GeocodeOutcome, PopularLocations, QueryError, ReverseOutcome,
    SearchOutcome,
};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
    from: Option<String>,
    to: Option<String>,
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        let message = e.to_string();
        match e {
            QueryError::InvalidArgument(_) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message,
                from: None,
                to: None,
            },
            QueryError::NotFound { from, to } => ApiError {
                status: StatusCode::NOT_FOUND,
                message,
                from: Some(from),
                to: Some(to),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.message,
            code: self.status.as_u16(),
            from: self.from,
            to: self.to,
        };
        (self.status, Json(body)).into_response()
    }
}

fn log_ok(route: &str, detail: &str, start: Instant) {
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(route, detail, elapsed_ms, "ok");
}

/// Log a handled request. Client errors are expected traffic, not failures.
fn log_request<T>(route: &str, detail: &str, result: &Result<T, ApiError>, start: Instant) {
    match result {
        Ok(_) => log_ok(route, detail, start),
        Err(e) => tracing::debug!(
            route,
            detail,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            status = e.status.as_u16(),
            error = %e.message,
            "rejected"
        ),
    }
}

// ─── Query string ────────────────────────────────────────────────

/// Raw query pairs. Repeated keys are allowed; lookups take the first value.
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for QueryPairs {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(uri = %parts.uri, error = %rejection.body_text(), "bad query string");
                ApiError::from(QueryError::invalid(rejection.body_text()))
            })?;
        Ok(Self(pairs))
    }
}

// ─── GET /api/search ─────────────────────────────────────────────

pub async fn search(
    State(state): State<Arc<AppState>>,
    params: QueryPairs,
) -> Result<Json<SearchOutcome>, ApiError> {
    let start = Instant::now();
    let q = params.get("q").unwrap_or_default();

    let result = state.gazetteer.search(q).map(Json).map_err(ApiError::from);
    log_request("GET /api/search", q, &result, start);
    result
}

// ─── POST /api/geocode ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeRequest {
    pub address: Option<String>,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Result<Json<GeocodeOutcome>, ApiError> {
    let start = Instant::now();

    let result = match payload {
        Ok(Json(req)) => {
            let address = req.address.unwrap_or_default();
            state.gazetteer.geocode(&address).map(Json).map_err(ApiError::from)
        }
        Err(rejection) => Err(ApiError::from(QueryError::invalid(format!(
            "Address is required: {}",
            rejection.body_text()
        )))),
    };
    log_request("POST /api/geocode", "", &result, start);
    result
}

// ─── GET /api/reverse-geocode ────────────────────────────────────

pub async fn reverse_geocode(
    State(state): State<Arc<AppState>>,
    params: QueryPairs,
) -> Result<Json<ReverseOutcome>, ApiError> {
    let start = Instant::now();
    let (lat, lng) = (params.get("lat"), params.get("lng"));

    let result = parse_coordinate(lat)
        .and_then(|lat| Ok((lat, parse_coordinate(lng)?)))
        .map(|(lat, lng)| Json(state.gazetteer.reverse_geocode(lat, lng)))
        .map_err(ApiError::from);

    let detail = format!("{},{}", lat.unwrap_or("0"), lng.unwrap_or("0"));
    log_request("GET /api/reverse-geocode", &detail, &result, start);
    result
}

// ─── GET /api/directions ─────────────────────────────────────────

pub async fn directions(
    State(state): State<Arc<AppState>>,
    params: QueryPairs,
) -> Result<Json<Directions>, ApiError> {
    let start = Instant::now();
    let from = params.get("from").unwrap_or_default();
    let to = params.get("to").unwrap_or_default();

    let result = state.gazetteer.directions(from, to).map(Json).map_err(ApiError::from);
    log_request("GET /api/directions", &format!("{} -> {}", from, to), &result, start);
    result
}

// ─── GET /api/popular-locations ──────────────────────────────────

pub async fn popular_locations(State(state): State<Arc<AppState>>) -> Json<PopularLocations> {
    let start = Instant::now();
    let popular = state.gazetteer.popular();
    log_ok("GET /api/popular-locations", &popular.count.to_string(), start);
    Json(popular)
}

// ─── POST /api/feedback ──────────────────────────────────────────

pub async fn submit_feedback(
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackReceipt>, ApiError> {
    let start = Instant::now();

    let result = match payload {
        Ok(Json(req)) => feedback::submit(req).map(Json).map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(QueryError::invalid(format!(
            "Invalid feedback payload: {}",
            rejection.body_text()
        )))),
    };
    log_request("POST /api/feedback", "", &result, start);
    result
}

// ─── GET /api/health ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    locations: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = Instant::now();
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        locations: state.gazetteer.count(),
    };
    log_ok("GET /api/health", "", start);
    Json(response)
}
