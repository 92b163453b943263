use std::{collections::VecDeque, time::Duration};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub(crate) type ToastId = Uuid;

/// Every placement the toast container supports. The app ships with
/// `BottomCenter`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CloseButton {
    Button,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ToastOptions {
    pub transition: String,
    pub max_toasts: usize,
    pub newest_on_top: bool,
    pub position: ToastPosition,
    /// `None` keeps toasts up until they are closed.
    pub timeout: Option<Duration>,
    pub close_on_click: bool,
    pub pause_on_focus_loss: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    /// Fraction of the toast's width it has to be dragged to be dismissed.
    pub draggable_percent: f32,
    pub show_close_button_on_hover: bool,
    pub hide_progress_bar: bool,
    pub close_button: CloseButton,
    pub icon: bool,
    pub rtl: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            transition: "fade".to_string(),
            max_toasts: 20,
            newest_on_top: false,
            position: ToastPosition::BottomCenter,
            timeout: None,
            close_on_click: true,
            pause_on_focus_loss: true,
            pause_on_hover: true,
            draggable: true,
            draggable_percent: 0.6,
            show_close_button_on_hover: false,
            hide_progress_bar: true,
            close_button: CloseButton::Button,
            icon: true,
            rtl: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "i",
            ToastKind::Warning => "!",
            ToastKind::Error => "×",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Set when the toast becomes visible, if the options have a timeout.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Owns every toast in the app.
///
/// At most `max_toasts` are visible at once. Anything past that waits in a
/// queue and is shown, oldest first, as visible toasts get closed. Visible
/// toasts are never pushed out to make room.
#[derive(Debug)]
pub(crate) struct Toaster {
    options: ToastOptions,
    visible: Vec<Toast>,
    queued: VecDeque<Toast>,
}

impl Toaster {
    pub(crate) fn new(options: ToastOptions) -> Self {
        Self {
            options,
            visible: vec![],
            queued: VecDeque::new(),
        }
    }

    pub(crate) fn options(&self) -> &ToastOptions {
        &self.options
    }

    pub(crate) fn visible(&self) -> &[Toast] {
        &self.visible
    }

    pub(crate) fn queued_len(&self) -> usize {
        self.queued.len()
    }

    pub(crate) fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.push_at(kind, message, Utc::now())
    }

    pub(crate) fn push_at(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> ToastId {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: now,
            expires_at: None,
        };
        let id = toast.id;

        if self.visible.len() < self.options.max_toasts {
            self.show(toast, now);
        } else {
            tracing::debug!(%id, queued = self.queued.len() + 1, "Toast limit reached, queueing");
            self.queued.push_back(toast);
        }

        id
    }

    fn show(&mut self, mut toast: Toast, now: DateTime<Utc>) {
        toast.expires_at = self
            .options
            .timeout
            .and_then(|timeout| chrono::Duration::from_std(timeout).ok())
            .and_then(|timeout| now.checked_add_signed(timeout));

        if self.options.newest_on_top {
            self.visible.insert(0, toast);
        } else {
            self.visible.push(toast);
        }
    }

    fn fill_from_queue(&mut self, now: DateTime<Utc>) {
        while self.visible.len() < self.options.max_toasts {
            let Some(next) = self.queued.pop_front() else {
                break;
            };
            self.show(next, now);
        }
    }

    pub(crate) fn dismiss(&mut self, id: ToastId) -> bool {
        self.dismiss_at(id, Utc::now())
    }

    fn dismiss_at(&mut self, id: ToastId, now: DateTime<Utc>) -> bool {
        if let Some(index) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(index);
            self.fill_from_queue(now);
            return true;
        }

        if let Some(index) = self.queued.iter().position(|t| t.id == id) {
            self.queued.remove(index);
            return true;
        }

        false
    }

    pub(crate) fn click(&mut self, id: ToastId) -> bool {
        self.options.close_on_click && self.dismiss(id)
    }

    /// `fraction` is how far across its own width the toast was dragged.
    pub(crate) fn drag(&mut self, id: ToastId, fraction: f32) -> bool {
        self.options.draggable
            && fraction.abs() >= self.options.draggable_percent
            && self.dismiss(id)
    }

    /// Closes visible toasts whose timeout has run out. Returns how many went.
    pub(crate) fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.visible.len();
        self.visible
            .retain(|toast| toast.expires_at.map_or(true, |expires_at| expires_at > now));

        let expired = before - self.visible.len();
        if expired > 0 {
            self.fill_from_queue(now);
        }

        expired
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(ToastOptions::default())
    }
}
