use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Redirect},
    Form,
};
use maud::html;
use recipe_api::{
    Ingredient, IngredientId, NewRecipe, NewRecipeIngredient, Tag, TagId, DEFAULT_SERVINGS,
};
use serde::Deserialize;

use crate::{
    http_server::{templates::base, MietteError, ResponseResult},
    navigation::Route,
    toasts::ToastKind,
    AppState,
};

const QUANTITY_PREFIX: &str = "quantity-";

/// The recipe form as posted by the browser.
///
/// Each known ingredient gets a `quantity-{id}` field; a blank quantity means
/// the ingredient isn't used. Checked tags arrive as repeated `tag` fields.
pub(crate) fn parse_recipe_form(body: &[u8]) -> Result<NewRecipe, serde_urlencoded::de::Error> {
    let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;

    let mut recipe = NewRecipe {
        name: String::new(),
        description: String::new(),
        servings: DEFAULT_SERVINGS,
        instructions: vec![],
        ingredients: vec![],
        tags: vec![],
    };

    for (key, value) in fields {
        match key.as_str() {
            "name" => recipe.name = value.trim().to_string(),
            "description" => recipe.description = value.trim().to_string(),
            "servings" => {
                recipe.servings = value.trim().parse().unwrap_or(DEFAULT_SERVINGS);
            }
            "instructions" => {
                recipe.instructions = value
                    .lines()
                    .map(str::trim)
                    .filter(|step| !step.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            "tag" => {
                if let Ok(id) = value.parse::<TagId>() {
                    recipe.tags.push(id);
                }
            }
            key => {
                let Some(id) = key.strip_prefix(QUANTITY_PREFIX) else {
                    continue;
                };
                let (Ok(id), quantity) = (id.parse::<IngredientId>(), value.trim()) else {
                    continue;
                };
                if !quantity.is_empty() {
                    recipe.ingredients.push(NewRecipeIngredient {
                        id,
                        quantity: quantity.to_string(),
                    });
                }
            }
        }
    }

    Ok(recipe)
}

pub(crate) async fn form_page(state: &AppState) -> ResponseResult {
    let (ingredients, tags) =
        match tokio::try_join!(state.api.get_ingredients(), state.api.get_tags()) {
            Ok(loaded) => loaded,
            Err(err) => {
                state.toast(
                    ToastKind::Error,
                    format!("Couldn't load ingredients and tags: {err}"),
                );
                return Err(MietteError::upstream(
                    err,
                    "Couldn't load ingredients and tags",
                ));
            }
        };

    Ok(base(state, "Add a recipe", recipe_form(&ingredients, &tags)).into_response())
}

fn recipe_form(ingredients: &[Ingredient], tags: &[Tag]) -> maud::Markup {
    html! {
      h1 { "Add a recipe" }

      form method="post" action="/add-recipe" class="stacked" {
        label for="name" { "Name" }
        input type="text" id="name" name="name" required;

        label for="description" { "Description" }
        input type="text" id="description" name="description" maxlength="100";

        label for="servings" { "Servings" }
        input type="number" id="servings" name="servings" min="1" value=(DEFAULT_SERVINGS.to_string());

        label for="instructions" { "Steps, one per line" }
        textarea id="instructions" name="instructions" rows="6" {}

        label { "Ingredients" }
        @if ingredients.is_empty() {
          p class="subtitle" { "No ingredients yet, add some below." }
        }
        @for ingredient in ingredients {
          div class="ingredient-row" {
            span { (ingredient.name) }
            input
              type="text"
              name=(format!("{QUANTITY_PREFIX}{}", ingredient.id))
              placeholder="Quantity"
              aria-label=(format!("Quantity of {}", ingredient.name));
          }
        }

        label { "Tags" }
        @for tag in tags {
          label class="tag" {
            input type="checkbox" name="tag" value=(tag.id.to_string());
            " " (tag.name)
          }
        }

        p {
          button type="submit" class="button button--primary" { "Save recipe" }
        }
      }

      h2 { "Missing something?" }

      form method="post" action="/add-recipe/ingredients" class="stacked" {
        label for="new-ingredient" { "New ingredient" }
        input type="text" id="new-ingredient" name="name" required;
        button type="submit" class="button button--secondary" { "Add ingredient" }
      }

      form method="post" action="/add-recipe/tags" class="stacked" {
        label for="new-tag" { "New tag" }
        input type="text" id="new-tag" name="name" required;
        button type="submit" class="button button--secondary" { "Add tag" }
      }
    }
}

pub(crate) async fn submit(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let recipe = match parse_recipe_form(&body) {
        Ok(recipe) => recipe,
        Err(err) => {
            tracing::warn!(error = %err, "Unreadable recipe form");
            state.toast(ToastKind::Error, "Couldn't read the recipe form");
            return Redirect::to(&Route::AddRecipe.path());
        }
    };

    match state.api.create_recipe(&recipe).await {
        Ok(created) => {
            tracing::info!(name = %created.name, "Recipe created");
            state.toast(ToastKind::Success, format!("Saved \"{}\"", created.name));
            Redirect::to(&Route::Home.path())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Creating recipe failed");
            state.toast(ToastKind::Error, format!("Couldn't save the recipe: {err}"));
            Redirect::to(&Route::AddRecipe.path())
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameForm {
    name: String,
}

pub(crate) async fn create_ingredient(
    State(state): State<AppState>,
    Form(NameForm { name }): Form<NameForm>,
) -> impl IntoResponse {
    match state.api.create_ingredient(name.trim()).await {
        Ok(ingredient) => {
            state.toast(
                ToastKind::Success,
                format!("Added ingredient \"{}\"", ingredient.name),
            );
        }
        Err(err) => {
            state.toast(ToastKind::Error, format!("Couldn't add ingredient: {err}"));
        }
    }

    Redirect::to(&Route::AddRecipe.path())
}

pub(crate) async fn create_tag(
    State(state): State<AppState>,
    Form(NameForm { name }): Form<NameForm>,
) -> impl IntoResponse {
    match state.api.create_tag(name.trim()).await {
        Ok(tag) => {
            state.toast(ToastKind::Success, format!("Added tag \"{}\"", tag.name));
        }
        Err(err) => {
            state.toast(ToastKind::Error, format!("Couldn't add tag: {err}"));
        }
    }

    Redirect::to(&Route::AddRecipe.path())
}
