use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;

use crate::{
    navigation::Route,
    toasts::{ToastId, ToastKind},
    AppState,
};

pub(crate) async fn dismiss_toast(
    State(state): State<AppState>,
    Path(id): Path<ToastId>,
) -> impl IntoResponse {
    if !state.toaster().click(id) {
        tracing::debug!(%id, "Toast already gone or not closable");
    }

    Redirect::to(&state.current_path())
}

#[derive(Debug, Deserialize)]
pub(crate) struct DragForm {
    fraction: f32,
}

pub(crate) async fn drag_toast(
    State(state): State<AppState>,
    Path(id): Path<ToastId>,
    Form(DragForm { fraction }): Form<DragForm>,
) -> impl IntoResponse {
    let dismissed = state.toaster().drag(id, fraction);
    tracing::debug!(%id, fraction, dismissed, "Toast dragged");

    Redirect::to(&state.current_path())
}

pub(crate) async fn history_back(State(state): State<AppState>) -> impl IntoResponse {
    let target = state.history().back().map(|entry| entry.path.clone());

    let target = target.unwrap_or_else(|| {
        state.toast(ToastKind::Info, "Nothing further back");
        Route::Home.path()
    });

    Redirect::to(&target)
}

pub(crate) async fn history_forward(State(state): State<AppState>) -> impl IntoResponse {
    let target = state
        .history()
        .forward()
        .map(|entry| entry.path.clone())
        .unwrap_or_else(|| state.current_path());

    Redirect::to(&target)
}
