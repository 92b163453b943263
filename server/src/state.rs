use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use miette::Result;
use recipe_api::{ApiConfig, RecipeApi};
use tracing::instrument;

use crate::{
    navigation::{History, Route},
    toasts::{Toast, ToastId, ToastKind, ToastOptions, Toaster},
};

/// Everything decided at startup. Never changes afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub toasts: ToastOptions,
    pub bind: SocketAddr,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 5173;

    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env(port: u16) -> Result<Self> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            toasts: ToastOptions::default(),
            bind: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub config: Arc<AppConfig>,
    pub api: RecipeApi,
    pub toasts: Arc<Mutex<Toaster>>,
    pub history: Arc<Mutex<History>>,
}

impl AppState {
    #[instrument(name = "AppState::new", skip_all, err)]
    pub fn new(config: AppConfig) -> Result<Self> {
        let api = RecipeApi::new(&config.api)?;
        let toaster = Toaster::new(config.toasts.clone());

        Ok(Self {
            config: Arc::new(config),
            api,
            toasts: Arc::new(Mutex::new(toaster)),
            history: Arc::new(Mutex::new(History::default())),
        })
    }

    pub(crate) fn toaster(&self) -> MutexGuard<'_, Toaster> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn toast(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let mut toaster = self.toaster();
        let id = toaster.push(kind, message);
        tracing::trace!(%id, kind = kind.as_str(), queued = toaster.queued_len(), "Toast pushed");

        id
    }

    /// Toasts to draw on the page being rendered right now.
    pub(crate) fn visible_toasts(&self) -> Vec<Toast> {
        let mut toaster = self.toaster();
        toaster.expire(chrono::Utc::now());
        toaster.visible().to_vec()
    }

    pub(crate) fn navigate(&self, path: &str) -> Route {
        let mut history = self.history();
        let route = history.push(path);
        tracing::trace!(route = %route.name(), entries = history.len(), "Navigated");

        route
    }

    /// Where to send the user after a form post.
    pub(crate) fn current_path(&self) -> String {
        self.history()
            .current()
            .map_or_else(|| Route::Home.path(), |entry| entry.path.clone())
    }
}
