use axum::response::IntoResponse;
use maud::html;
use recipe_api::{RecipeSummary, Tag, TagId};
use serde::Deserialize;

use crate::{
    http_server::{
        templates::{base, buttons::LinkButton},
        MietteError, ResponseResult,
    },
    toasts::ToastKind,
    AppState,
};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct SearchParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

impl SearchParams {
    /// Unreadable query strings just mean "no filter".
    pub(crate) fn from_query(query: Option<&str>) -> Self {
        query
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default()
    }

    fn needle(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn tag_id(&self) -> Option<TagId> {
        self.tag.as_deref().and_then(|tag| tag.trim().parse().ok())
    }
}

pub(crate) fn filter_recipes(recipes: Vec<RecipeSummary>, params: &SearchParams) -> Vec<RecipeSummary> {
    let needle = params.needle();
    let tag = params.tag_id();

    recipes
        .into_iter()
        .filter(|recipe| tag.map_or(true, |tag| recipe.has_tag(tag)))
        .filter(|recipe| {
            needle.as_ref().map_or(true, |needle| {
                recipe.name.to_lowercase().contains(needle)
                    || recipe.description.to_lowercase().contains(needle)
            })
        })
        .collect()
}

fn tag_name(tags: &[Tag], id: TagId) -> Option<&str> {
    tags.iter().find(|t| t.id == id).map(|t| t.name.as_str())
}

fn tag_href(tag: TagId, params: &SearchParams) -> String {
    match params.needle() {
        Some(q) => format!("/?q={}&tag={tag}", urlencoding::encode(&q)),
        None => format!("/?tag={tag}"),
    }
}

pub(crate) async fn search_page(state: &AppState, params: &SearchParams) -> ResponseResult {
    let (recipes, tags) = match tokio::try_join!(state.api.get_recipes(), state.api.get_tags()) {
        Ok(loaded) => loaded,
        Err(err) => {
            state.toast(ToastKind::Error, format!("Couldn't load recipes: {err}"));
            return Err(MietteError::upstream(err, "Couldn't load recipes"));
        }
    };

    let total = recipes.len();
    let recipes = filter_recipes(recipes, params);
    let active_tag = params.tag_id();

    if let Some(tag) = active_tag {
        if tag_name(&tags, tag).is_none() {
            state.toast(ToastKind::Warning, format!("There is no tag with id {tag}"));
        }
    }

    Ok(base(
        state,
        "Search",
        html! {
          h1 { "Find a recipe" }

          form method="get" action="/" class="stacked" {
            label for="q" { "Search" }
            input type="text" id="q" name="q" value=(params.q.clone().unwrap_or_default()) placeholder="Pancakes, soup, ...";
            @if let Some(tag) = active_tag {
              input type="hidden" name="tag" value=(tag.to_string());
            }
          }

          p {
            @for tag in &tags {
              @if active_tag == Some(tag.id) {
                a class="tag tag--active" href="/" { (tag.name) }
              } @else {
                a class="tag" href=(tag_href(tag.id, params)) { (tag.name) }
              }
            }
          }

          p class="subtitle" { (format!("Showing {} of {} recipes", recipes.len(), total)) }

          @if recipes.is_empty() {
            p { "No recipes match." }
            (LinkButton::primary(html!("Add one"), "/add-recipe"))
          } @else {
            ul class="recipe-list" {
              @for recipe in &recipes {
                li {
                  a href=(format!("/recipes/{}", recipe.id)) { strong { (recipe.name) } }
                  @if !recipe.description.is_empty() {
                    p class="subtitle" { (recipe.description) }
                  }
                  @for tag in &recipe.tags {
                    @if let Some(name) = tag_name(&tags, *tag) {
                      span class="tag" { (name) }
                    }
                  }
                }
              }
            }
          }
        },
    )
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, description: &str, tags: Vec<TagId>) -> RecipeSummary {
        RecipeSummary {
            id,
            name: name.to_string(),
            cover_image: None,
            description: description.to_string(),
            tags,
        }
    }

    fn recipes() -> Vec<RecipeSummary> {
        vec![
            summary(1, "Tomato Soup", "Warm and red", vec![1]),
            summary(2, "Pancakes", "Sunday breakfast", vec![2]),
            summary(3, "Pea Soup", "Green", vec![1, 2]),
        ]
    }

    fn ids(recipes: &[RecipeSummary]) -> Vec<i64> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn no_params_keeps_everything() {
        let filtered = filter_recipes(recipes(), &SearchParams::default());

        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let params = SearchParams {
            q: Some("  SOUP ".to_string()),
            tag: None,
        };
        assert_eq!(ids(&filter_recipes(recipes(), &params)), vec![1, 3]);

        let params = SearchParams {
            q: Some("breakfast".to_string()),
            tag: None,
        };
        assert_eq!(ids(&filter_recipes(recipes(), &params)), vec![2]);
    }

    #[test]
    fn tag_and_query_combine() {
        let params = SearchParams {
            q: Some("soup".to_string()),
            tag: Some("2".to_string()),
        };

        assert_eq!(ids(&filter_recipes(recipes(), &params)), vec![3]);
    }

    #[test]
    fn unparseable_tag_is_ignored() {
        let params = SearchParams {
            q: None,
            tag: Some("vegan".to_string()),
        };

        assert_eq!(ids(&filter_recipes(recipes(), &params)), vec![1, 2, 3]);
    }

    #[test]
    fn params_from_query_string() {
        assert_eq!(
            SearchParams::from_query(Some("q=pea+soup&tag=2")),
            SearchParams {
                q: Some("pea soup".to_string()),
                tag: Some("2".to_string()),
            }
        );
        assert_eq!(SearchParams::from_query(None), SearchParams::default());
    }
}
