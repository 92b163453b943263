use std::net::SocketAddr;

use axum::{response::Response, Router};
use miette::{Context, IntoDiagnostic};
use tokio::net::TcpListener;

use crate::AppState;
use errors::*;

pub(crate) mod cmd;

pub(crate) mod pages {
    pub mod add_recipe;
    pub mod not_found;
    pub mod recipe_details;
    pub mod search;
}

mod actions;
pub mod errors;
pub(crate) mod routes;
mod templates;
mod trace;

#[cfg(test)]
pub(crate) mod test_helpers;

type ResponseResult<T = Response> = Result<T, MietteError>;

pub(crate) async fn run_server(app_state: AppState) -> miette::Result<()> {
    let addr: SocketAddr = app_state.config.bind;
    let app = make_app(app_state);

    let listener = TcpListener::bind(&addr)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open {addr}"))?;

    let addr = listener.local_addr().into_diagnostic()?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .into_diagnostic()
        .wrap_err("Failed to run server")
}

pub(crate) fn make_app(app_state: AppState) -> Router {
    let tracer = trace::Tracer;
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tracer)
        .on_response(tracer);

    routes::make_router().with_state(app_state).layer(trace_layer)
}
