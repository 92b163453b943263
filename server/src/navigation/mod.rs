//! Client-side navigation: which view a path belongs to, and where the user
//! has been.

use std::fmt;

mod history;

pub(crate) use history::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteName {
    Home,
    AddRecipe,
    RecipeDetails,
    NotFound,
}

impl RouteName {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::AddRecipe => "AddRecipe",
            RouteName::RecipeDetails => "RecipeDetails",
            RouteName::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    AddRecipe,
    /// `id` is exactly the path segment, never parsed.
    RecipeDetails { id: String },
    NotFound { path: String },
}

enum Segment {
    Exact(&'static str),
    Param,
}

enum Pattern {
    Segments(&'static [Segment]),
    CatchAll,
}

impl Pattern {
    fn matches(&self, segments: &[&str]) -> Option<Vec<String>> {
        let expected = match self {
            Pattern::CatchAll => return Some(vec![]),
            Pattern::Segments(expected) => expected,
        };

        if expected.len() != segments.len() {
            return None;
        }

        let mut params = vec![];
        for (expected, actual) in expected.iter().zip(segments) {
            match expected {
                Segment::Exact(literal) if literal == actual => {}
                Segment::Param if !actual.is_empty() => params.push((*actual).to_string()),
                _ => return None,
            }
        }

        Some(params)
    }
}

/// Evaluated top to bottom, first match wins. The catch-all stays last.
static ROUTE_TABLE: [(&str, Pattern, RouteName); 4] = [
    ("/", Pattern::Segments(&[]), RouteName::Home),
    (
        "/add-recipe",
        Pattern::Segments(&[Segment::Exact("add-recipe")]),
        RouteName::AddRecipe,
    ),
    (
        "/recipes/:id",
        Pattern::Segments(&[Segment::Exact("recipes"), Segment::Param]),
        RouteName::RecipeDetails,
    ),
    ("/*", Pattern::CatchAll, RouteName::NotFound),
];

impl Route {
    /// `path` is matched as it appears in the URL, still percent-encoded.
    pub(crate) fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments = split_segments(path);

        ROUTE_TABLE
            .iter()
            .find_map(|(_, pattern, name)| {
                pattern
                    .matches(&segments)
                    .map(|params| Self::from_match(*name, params, path))
            })
            .unwrap_or_else(|| Route::NotFound {
                path: path.to_string(),
            })
    }

    fn from_match(name: RouteName, mut params: Vec<String>, path: &str) -> Self {
        match name {
            RouteName::Home => Route::Home,
            RouteName::AddRecipe => Route::AddRecipe,
            RouteName::RecipeDetails => Route::RecipeDetails {
                id: params.swap_remove(0),
            },
            RouteName::NotFound => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub(crate) fn name(&self) -> RouteName {
        match self {
            Route::Home => RouteName::Home,
            Route::AddRecipe => RouteName::AddRecipe,
            Route::RecipeDetails { .. } => RouteName::RecipeDetails,
            Route::NotFound { .. } => RouteName::NotFound,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::AddRecipe => "/add-recipe".to_string(),
            Route::RecipeDetails { id } => format!("/recipes/{id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// The routing table as `(pattern, name)` pairs, in match order.
    pub(crate) fn table() -> impl Iterator<Item = (&'static str, RouteName)> {
        ROUTE_TABLE
            .iter()
            .map(|(pattern, _, name)| (*pattern, *name))
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    // One trailing slash is the same page
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        vec![]
    } else {
        path.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/add-recipe"), Route::AddRecipe);
        assert_eq!(
            Route::resolve("/recipes/42"),
            Route::RecipeDetails {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn recipe_id_is_not_coerced() {
        assert_eq!(
            Route::resolve("/recipes/pancakes"),
            Route::RecipeDetails {
                id: "pancakes".to_string()
            }
        );
        assert_eq!(
            Route::resolve("/recipes/007"),
            Route::RecipeDetails {
                id: "007".to_string()
            }
        );
    }

    #[test]
    fn everything_else_is_not_found() {
        for path in [
            "/recipes",
            "/recipes/",
            "/recipes/1/edit",
            "/recipes//1",
            "/unknown/deep/path",
            "/add-recipe/extra",
            "/Add-Recipe",
        ] {
            assert_eq!(
                Route::resolve(path).name(),
                RouteName::NotFound,
                "{path} should not match a view"
            );
        }
    }

    #[test]
    fn not_found_keeps_the_path() {
        assert_eq!(
            Route::resolve("/unknown/deep/path"),
            Route::NotFound {
                path: "/unknown/deep/path".to_string()
            }
        );
    }

    #[test]
    fn query_and_trailing_slash_are_ignored() {
        assert_eq!(Route::resolve("/?q=soup"), Route::Home);
        assert_eq!(Route::resolve("/add-recipe/"), Route::AddRecipe);
        assert_eq!(
            Route::resolve("/recipes/42/#steps"),
            Route::RecipeDetails {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn encoded_separators_stay_in_the_id() {
        assert_eq!(
            Route::resolve("/recipes/a%3Fb?q=1"),
            Route::RecipeDetails {
                id: "a%3Fb".to_string()
            }
        );
        assert_eq!(
            Route::resolve("/recipes/a%23b"),
            Route::RecipeDetails {
                id: "a%23b".to_string()
            }
        );
    }

    #[test]
    fn path_round_trips() {
        for path in ["/", "/add-recipe", "/recipes/42", "/nope"] {
            assert_eq!(Route::resolve(path).path(), path);
        }
    }

    #[test]
    fn catch_all_is_last() {
        let table: Vec<_> = Route::table().collect();

        assert_eq!(table.last(), Some(&("/*", RouteName::NotFound)));
        assert_eq!(
            table.iter().map(|(_, name)| name.as_str()).collect::<Vec<_>>(),
            vec!["Home", "AddRecipe", "RecipeDetails", "NotFound"]
        );
    }
}
