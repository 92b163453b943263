use axum::{
    extract::State,
    http::{header::ACCEPT, uri::PathAndQuery, HeaderMap, Method, Uri},
    routing::post,
    Router,
};

use super::{actions, pages, ResponseResult};
use crate::{navigation::Route, AppState};

/// Page views are not axum routes. Every GET falls through to [`dispatch`],
/// which resolves the path with the navigation router, so any path the
/// router doesn't know ends on the not-found page instead of a bare 404/405.
pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route(
            "/add-recipe",
            post(pages::add_recipe::submit).fallback(dispatch),
        )
        .route(
            "/add-recipe/ingredients",
            post(pages::add_recipe::create_ingredient).fallback(dispatch),
        )
        .route(
            "/add-recipe/tags",
            post(pages::add_recipe::create_tag).fallback(dispatch),
        )
        .route(
            "/toasts/{id}/dismiss",
            post(actions::dismiss_toast).fallback(dispatch),
        )
        .route(
            "/toasts/{id}/drag",
            post(actions::drag_toast).fallback(dispatch),
        )
        .route(
            "/history/back",
            post(actions::history_back).fallback(dispatch),
        )
        .route(
            "/history/forward",
            post(actions::history_forward).fallback(dispatch),
        )
        .fallback(dispatch)
}

/// Whether the browser is loading a page, as opposed to fetching a favicon,
/// an image or a script on its own.
fn is_page_load(headers: &HeaderMap) -> bool {
    if let Some(dest) = headers.get("sec-fetch-dest") {
        return dest.as_bytes() == b"document";
    }

    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|accept| accept.contains("text/html"))
}

async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
) -> ResponseResult {
    // Still percent-encoded, so an encoded `?` or `#` stays inside its segment
    let location = uri
        .path_and_query()
        .map_or_else(|| uri.path(), PathAndQuery::as_str);

    let route = if method == Method::GET && is_page_load(&headers) {
        state.navigate(location)
    } else {
        Route::resolve(uri.path())
    };
    tracing::debug!(route = %route.name(), %location, "Dispatching");

    match route {
        Route::Home => {
            let params = pages::search::SearchParams::from_query(uri.query());
            pages::search::search_page(&state, &params).await
        }
        Route::AddRecipe => pages::add_recipe::form_page(&state).await,
        Route::RecipeDetails { id } => pages::recipe_details::recipe_page(&state, &id).await,
        Route::NotFound { path } => Ok(pages::not_found::not_found_page(&state, &path)),
    }
}
