use maud::{html, Markup, PreEscaped};

use crate::toasts::{CloseButton, Toast, ToastOptions};

/// Posts the drag distance so the server can decide whether it was enough.
const DRAG_SCRIPT: &str = r#"
document.querySelectorAll('[data-draggable="true"]').forEach((toast) => {
  let startX = null;
  toast.addEventListener('pointerdown', (e) => { startX = e.clientX; });
  toast.addEventListener('pointerup', (e) => {
    if (startX === null) return;
    const fraction = (e.clientX - startX) / toast.offsetWidth;
    startX = null;
    if (Math.abs(fraction) < Number(toast.dataset.draggablePercent)) return;
    fetch(`/toasts/${toast.dataset.toastId}/drag`, {
      method: 'POST',
      headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
      body: `fraction=${fraction}`,
    }).then(() => toast.remove());
  });
});
"#;

pub(crate) fn toast_container(toasts: &[Toast], options: &ToastOptions) -> Markup {
    let mut classes = format!("toasts toasts--{}", options.position.as_str());
    if options.rtl {
        classes.push_str(" toasts--rtl");
    }

    html! {
      div
        class=(classes)
        data-max-toasts=(options.max_toasts.to_string())
        data-pause-on-hover=(options.pause_on_hover.to_string())
        data-pause-on-focus-loss=(options.pause_on_focus_loss.to_string())
        aria-live="polite" {
        @for toast in toasts {
          (render_toast(toast, options))
        }
      }

      @if options.draggable && !toasts.is_empty() {
        script { (PreEscaped(DRAG_SCRIPT)) }
      }
    }
}

fn render_toast(toast: &Toast, options: &ToastOptions) -> Markup {
    let dismiss = format!("/toasts/{}/dismiss", toast.id);
    let classes = format!(
        "toast toast--{} toast--{}",
        toast.kind.as_str(),
        options.transition
    );
    let close_classes = if options.show_close_button_on_hover {
        "toast__close toast__close--hover"
    } else {
        "toast__close"
    };

    html! {
      div
        class=(classes)
        role="alert"
        data-toast-id=(toast.id.to_string())
        data-created-at=(toast.created_at.to_rfc3339())
        data-draggable=(options.draggable.to_string())
        data-draggable-percent=(options.draggable_percent.to_string()) {
        @if options.icon {
          span class="toast__icon" aria-hidden="true" { (toast.kind.icon()) }
        }

        @if options.close_on_click {
          form method="post" action=(dismiss) class="toast__body" {
            button type="submit" class="toast__message" { (toast.message) }
          }
        } @else {
          span class="toast__body toast__message" { (toast.message) }
        }

        @if options.close_button == CloseButton::Button {
          form method="post" action=(dismiss) {
            button type="submit" class=(close_classes) aria-label="Close" { "×" }
          }
        }

        @if !options.hide_progress_bar && options.timeout.is_some() {
          div class="toast__progress" {}
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use crate::toasts::{ToastKind, Toaster};

    use super::*;

    #[test]
    fn renders_bottom_center_without_progress_bar() {
        let mut toaster = Toaster::default();
        let id = toaster.push(ToastKind::Success, "Recipe saved");

        let html = toast_container(toaster.visible(), toaster.options()).into_string();

        assert!(html.contains("toasts--bottom-center"));
        assert!(html.contains("Recipe saved"));
        assert!(html.contains(&format!("/toasts/{id}/dismiss")));
        assert!(html.contains("data-draggable-percent=\"0.6\""));
        assert!(!html.contains("toast__progress"));
    }

    #[test]
    fn other_placements_and_hidden_close_button() {
        let options = ToastOptions {
            position: crate::toasts::ToastPosition::TopRight,
            close_button: CloseButton::Hidden,
            rtl: true,
            ..ToastOptions::default()
        };
        let mut toaster = Toaster::new(options);
        toaster.push(ToastKind::Warning, "Careful");

        let html = toast_container(toaster.visible(), toaster.options()).into_string();

        assert!(html.contains("toasts toasts--top-right toasts--rtl"));
        assert!(!html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn empty_container_has_no_script() {
        let toaster = Toaster::default();

        let html = toast_container(toaster.visible(), toaster.options()).into_string();

        assert!(!html.contains("<script>"));
    }
}
