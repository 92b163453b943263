use axum::response::IntoResponse;
use maud::html;
use recipe_api::Recipe;

use crate::{
    http_server::{
        pages::not_found,
        templates::{base, buttons::LinkButton},
        MietteError, ResponseResult,
    },
    toasts::ToastKind,
    AppState,
};

pub(crate) async fn recipe_page(state: &AppState, id: &str) -> ResponseResult {
    let recipe = match state.api.get_recipe_by_id(id).await {
        Ok(recipe) => recipe,
        Err(err) if err.status() == Some(reqwest::StatusCode::NOT_FOUND) => {
            tracing::debug!(id, "Recipe not found");
            return Ok(not_found::not_found_page(state, &format!("/recipes/{id}")));
        }
        Err(err) => {
            state.toast(ToastKind::Error, format!("Couldn't load the recipe: {err}"));
            return Err(MietteError::upstream(err, "Couldn't load the recipe"));
        }
    };

    Ok(base(state, &recipe.name, recipe_markup(&recipe)).into_response())
}

fn recipe_markup(recipe: &Recipe) -> maud::Markup {
    html! {
      article {
        h1 { (recipe.name) }

        @if let Some(cover_image) = &recipe.cover_image {
          img src=(cover_image) alt=(recipe.name) width="800";
        }

        @if !recipe.description.is_empty() {
          p class="subtitle" { (recipe.description) }
        }

        p {
          @for tag in &recipe.tags {
            a class="tag" href=(format!("/?tag={}", tag.id)) { (tag.name) }
          }
        }

        h2 { (format!("Ingredients · serves {}", recipe.servings)) }
        ul {
          @for item in &recipe.ingredients {
            li { (item.quantity) " " (item.ingredient.name) }
          }
        }

        h2 { "Steps" }
        ol {
          @for step in &recipe.instructions {
            li { (step) }
          }
        }

        (LinkButton::secondary(html!("Add another recipe"), "/add-recipe"))
      }
    }
}
