use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::AppState;

pub(crate) mod buttons;
pub(crate) mod toasts;

const STYLES: &str = include_str!("styles.css");

pub fn head(title: &str) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        link rel="icon" href="data:,";
        title { (title) " · Recipe Box" }
        style { (PreEscaped(STYLES)) }
      }
    }
}

pub fn header(can_go_back: bool, can_go_forward: bool) -> Markup {
    html! {
      header class="site-header" {
        a href="/" { strong { "Recipe Box" } }

        nav {
          ul {
            @if can_go_back {
              li {
                (buttons::PostButton::secondary(html!("← Back"), "/history/back"))
              }
            }

            @if can_go_forward {
              li {
                (buttons::PostButton::secondary(html!("Forward →"), "/history/forward"))
              }
            }

            li {
              a href="/" { "Search" }
            }

            li {
              a href="/add-recipe" { "Add a recipe" }
            }
          }
        }
      }
    }
}

/// Page shell shared by every view. Toasts stay up until they are closed, so
/// every page draws all of the visible ones.
pub(crate) fn base(state: &AppState, title: &str, inner: Markup) -> Markup {
    let visible_toasts = state.visible_toasts();
    let (can_go_back, can_go_forward) = {
        let history = state.history();
        (history.can_go_back(), history.can_go_forward())
    };

    html! {
      (DOCTYPE)
      html lang="en" {
        (head(title))

        body {
          (header(can_go_back, can_go_forward))

          main {
            (inner)
          }

          (toasts::toast_container(&visible_toasts, &state.config.toasts))
        }
      }
    }
}
