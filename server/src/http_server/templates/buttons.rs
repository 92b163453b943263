use maud::{html, Markup, Render};

pub struct LinkButton {
    inner: Markup,
    href: String,
    button_type: ButtonType,
    additional_classes: Option<String>,
}

impl LinkButton {
    pub fn primary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            button_type: ButtonType::Primary,
            additional_classes: None,
        }
    }

    pub fn secondary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            button_type: ButtonType::Secondary,
            additional_classes: None,
        }
    }

    pub fn with_classes(mut self, classes: &str) -> Self {
        self.additional_classes = Some(classes.to_string());
        self
    }
}

/// A button that posts an empty form, for actions that aren't navigation.
pub struct PostButton {
    inner: Markup,
    action: String,
    button_type: ButtonType,
}

impl PostButton {
    pub fn secondary(inner: Markup, action: impl Into<String>) -> Self {
        Self {
            inner,
            action: action.into(),
            button_type: ButtonType::Secondary,
        }
    }
}

pub enum ButtonType {
    Primary,
    Secondary,
}

impl ButtonType {
    fn classes(&self) -> &str {
        match &self {
            ButtonType::Primary => "button button--primary",
            ButtonType::Secondary => "button button--secondary",
        }
    }
}

impl Render for LinkButton {
    fn render(&self) -> Markup {
        let mut classes = vec![self.button_type.classes()];

        if let Some(additional_classes) = &self.additional_classes {
            classes.push(additional_classes);
        }
        let classes = classes.join(" ");

        html! {
          a href=(self.href) class=(classes) {
            (self.inner)
          }
        }
    }
}

impl Render for PostButton {
    fn render(&self) -> Markup {
        html! {
          form method="post" action=(self.action) class="inline-form" {
            button type="submit" class=(self.button_type.classes()) {
              (self.inner)
            }
          }
        }
    }
}
