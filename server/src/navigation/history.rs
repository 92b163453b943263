use super::Route;

/// Browsers keep about this many session history entries per tab.
const MAX_ENTRIES: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    /// Path plus query string, so going back restores a search.
    pub path: String,
    pub route: Route,
}

/// Visited routes plus a cursor, with browser back/forward semantics.
#[derive(Debug, Default)]
pub(crate) struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Records a navigation and returns the route it resolved to.
    ///
    /// Anything ahead of the cursor is discarded. Navigating to the page we
    /// are already on is a reload and doesn't add an entry.
    pub(crate) fn push(&mut self, path: &str) -> Route {
        let route = Route::resolve(path);

        if self.current().is_some_and(|current| current.path == path) {
            return route;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push(HistoryEntry {
            path: path.to_string(),
            route: route.clone(),
        });

        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;

        route
    }

    pub(crate) fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub(crate) fn back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }

        self.cursor -= 1;
        self.current()
    }

    pub(crate) fn forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }

        self.cursor += 1;
        self.current()
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_resolves_and_records() {
        let mut history = History::default();

        assert_eq!(history.push("/"), Route::Home);
        assert_eq!(
            history.push("/recipes/3"),
            Route::RecipeDetails {
                id: "3".to_string()
            }
        );

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().path, "/recipes/3");
    }

    #[test]
    fn back_and_forward() {
        let mut history = History::default();
        history.push("/");
        history.push("/add-recipe");
        history.push("/recipes/1");

        assert_eq!(history.back().unwrap().route, Route::AddRecipe);
        assert_eq!(history.back().unwrap().route, Route::Home);
        assert!(history.back().is_none());
        assert_eq!(history.current().unwrap().route, Route::Home);

        assert_eq!(history.forward().unwrap().route, Route::AddRecipe);
        assert_eq!(history.forward().unwrap().path, "/recipes/1");
        assert!(history.forward().is_none());
    }

    #[test]
    fn pushing_after_back_drops_forward_entries() {
        let mut history = History::default();
        history.push("/");
        history.push("/recipes/1");
        history.back();

        history.push("/add-recipe");

        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.back().unwrap().path, "/");
    }

    #[test]
    fn reload_is_not_a_new_entry() {
        let mut history = History::default();
        history.push("/");
        history.push("/recipes/1");
        history.back();

        history.push("/");

        assert_eq!(history.len(), 2);
        assert!(history.can_go_forward());
    }

    #[test]
    fn query_is_part_of_the_entry() {
        let mut history = History::default();
        history.push("/?q=soup");

        assert_eq!(history.push("/?q=stew"), Route::Home);
        assert_eq!(history.len(), 2);
        assert_eq!(history.back().unwrap().path, "/?q=soup");
    }

    #[test]
    fn unknown_paths_are_recorded_as_not_found() {
        let mut history = History::default();

        let route = history.push("/nowhere");

        assert_eq!(
            route,
            Route::NotFound {
                path: "/nowhere".to_string()
            }
        );
        assert_eq!(history.current().unwrap().route, route);
    }

    #[test]
    fn oldest_entries_fall_off() {
        let mut history = History::default();
        for i in 0..=MAX_ENTRIES {
            history.push(&format!("/recipes/{i}"));
        }

        assert_eq!(history.len(), MAX_ENTRIES);
        while history.back().is_some() {}
        assert_eq!(history.current().unwrap().path, "/recipes/1");
    }
}
