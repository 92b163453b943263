use tracing::instrument;

pub mod ingredients;
pub mod models;
pub mod recipes;
pub mod tags;

use miette::{Context, IntoDiagnostic, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};

pub use models::*;

pub const API_URL_ENV: &str = "VITE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[instrument(name = "ApiConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        Self::from_override(std::env::var(API_URL_ENV).ok())
    }

    /// An empty override counts as unset, same as a blank `.env` entry.
    pub fn from_override(base_url: Option<String>) -> Result<Self> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        reqwest::Url::parse(&base_url)
            .into_diagnostic()
            .wrap_err_with(|| format!("{API_URL_ENV} is not a valid URL: {base_url}"))?;

        Ok(Self { base_url })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Client for the recipes backend.
///
/// Every method issues exactly one request and hands back whatever the
/// transport produced: connection failures, non-2xx statuses and bodies that
/// don't decode all come back as the underlying [`reqwest::Error`].
#[derive(Debug, Clone)]
pub struct RecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl RecipeApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .into_diagnostic()
            .wrap_err("Couldn't build the recipes API client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> reqwest::Result<T> {
        self.client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> reqwest::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_when_unset() {
        let config = ApiConfig::from_override(None).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let config = ApiConfig::from_override(Some("  ".to_string())).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn override_is_used_verbatim() {
        let config =
            ApiConfig::from_override(Some("https://recipes.example.com/api".to_string())).unwrap();
        assert_eq!(config.base_url, "https://recipes.example.com/api");
    }

    #[test]
    fn invalid_override_is_rejected() {
        assert!(ApiConfig::from_override(Some("not a url".to_string())).is_err());
    }

    #[test]
    fn urls_keep_the_api_prefix() {
        let api = RecipeApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(api.url("/tags/"), "http://localhost:8000/api/tags/");

        let api = RecipeApi::new(&ApiConfig {
            base_url: "http://localhost:8000/api/".to_string(),
        })
        .unwrap();
        assert_eq!(api.url("/recipes/7/"), "http://localhost:8000/api/recipes/7/");
    }
}
