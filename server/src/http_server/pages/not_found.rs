use axum::{http::StatusCode, response::{IntoResponse, Response}};
use maud::html;

use crate::{
    http_server::templates::{base, buttons::LinkButton},
    AppState,
};

pub(crate) fn not_found_page(state: &AppState, path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        base(
            state,
            "Not found",
            html! {
              h1 { "Page not found" }
              p class="subtitle" { "There's nothing at " code { (path) } "." }
              (LinkButton::primary(html!("Back to the recipes"), "/").with_classes("not-found__home"))
            },
        ),
    )
        .into_response()
}
