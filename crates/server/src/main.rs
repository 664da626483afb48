// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState, rejection::QueryRejection},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::any,
};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use till_salary_api::{
    ApiError, ApiResponse, HowMuchRequest, ListSuffix, encode_response, how_much,
    list_pay_day_dates,
};
use till_salary_domain::{Clock, FixedClock, SystemClock};
use tracing::{error, info, warn};

/// Till-Salary Server - how long until pay day
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Trailing path segment accepted by the pay date list endpoint
    /// (`list-dates` or `list-distinct`)
    #[arg(long, default_value_t = ListSuffix::ListDates)]
    list_suffix: ListSuffix,

    /// Pin the clock to a local instant (`YYYY-MM-DDTHH:MM:SS`) instead of
    /// reading the system clock
    #[arg(long)]
    now: Option<NaiveDateTime>,
}

/// Application state shared across handlers.
///
/// Nothing in here is mutable; handlers only read the clock and the
/// configured list suffix.
#[derive(Clone)]
struct AppState {
    /// Source of the current instant.
    clock: Arc<dyn Clock>,
    /// Trailing segment accepted by the pay date list endpoint.
    list_suffix: ListSuffix,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ApiResponse<()>> = Json(ApiResponse::message_only(&self.message));
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidRoute { .. } | ApiError::InvalidPayDay { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Serialization { .. } => {
                error!(error = %err, "Failed to write response");
                StatusCode::BAD_REQUEST
            }
        };

        warn!(error = %err, status = status.as_u16(), "Rejected request");

        Self {
            status,
            message: err.client_message().to_string(),
        }
    }
}

/// Encodes a successful response with `201 Created`.
fn created<T: Serialize>(response: &ApiResponse<T>) -> Result<Response, HttpError> {
    let body: Vec<u8> = encode_response(response)?;
    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Handler for GET `/till-salary/how-much`.
///
/// Returns the next pay date and the days remaining until it. The query is
/// read as raw pairs so a repeated `pay_day` resolves to its first value.
async fn handle_how_much(
    AxumState(app_state): AxumState<AppState>,
    method: Method,
    uri: Uri,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, HttpError> {
    info!(%method, path = uri.path(), "Handling how_much request");

    let pairs: Vec<(String, String)> = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable query string");
            Vec::new()
        }
    };
    let request: HowMuchRequest = HowMuchRequest::from_query_pairs(pairs);

    let response = how_much(
        method.as_str(),
        uri.path(),
        &request,
        app_state.clock.as_ref(),
    )?;
    created(&response)
}

/// Handler for GET `/till-salary/pay-day/{n}/{suffix}`.
///
/// Returns the pay dates remaining in the current year.
async fn handle_list_pay_day_dates(
    AxumState(app_state): AxumState<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, HttpError> {
    info!(%method, path = uri.path(), "Handling list_pay_day_dates request");

    let response = list_pay_day_dates(
        method.as_str(),
        uri.path(),
        app_state.list_suffix,
        app_state.clock.as_ref(),
    )?;
    created(&response)
}

/// Fallback for paths outside the till-salary endpoints.
async fn handle_not_found(uri: Uri) -> HttpError {
    info!(path = uri.path(), "No route for request");
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: String::from("Not found"),
    }
}

/// Builds the application router with all endpoints.
///
/// Both endpoints accept every method so that non-GET requests receive the
/// JSON 405 envelope. Sub-paths are routed to the owning handler, which
/// rejects malformed shapes with a 400.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/till-salary/how-much", any(handle_how_much))
        .route("/till-salary/how-much/", any(handle_how_much))
        .route("/till-salary/how-much/{*rest}", any(handle_how_much))
        .route("/till-salary/pay-day", any(handle_list_pay_day_dates))
        .route("/till-salary/pay-day/", any(handle_list_pay_day_dates))
        .route("/till-salary/pay-day/{*rest}", any(handle_list_pay_day_dates))
        .fallback(handle_not_found)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing till-salary server");

    let clock: Arc<dyn Clock> = if let Some(wall_time) = args.now {
        let fixed: FixedClock = FixedClock::from_local(wall_time).ok_or_else(|| {
            format!("--now {wall_time} does not exist in the local time zone")
        })?;
        info!(instant = %fixed.now(), "Using fixed clock");
        Arc::new(fixed)
    } else {
        info!("Using system clock");
        Arc::new(SystemClock)
    };

    info!(list_suffix = %args.list_suffix, "Pay day list endpoint configured");

    let app_state: AppState = AppState {
        clock,
        list_suffix: args.list_suffix,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
