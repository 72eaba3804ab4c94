//! Public client surface + builder.
//!
//! The client owns the `reqwest::Client` and the three endpoint roots:
//! the GitHub content API, the raw static mirror, and the Sleeper league
//! API. All three are overridable so tests can point them at a mock server.

use crate::core::PreviewsError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub(crate) const DEFAULT_CONTENT_API: &str = "https://api.github.com/";
pub(crate) const DEFAULT_RAW_MIRROR: &str = "https://raw.githubusercontent.com/";
pub(crate) const DEFAULT_LEAGUE_API: &str = "https://api.sleeper.app/v1/";

pub(crate) const USER_AGENT: &str =
    concat!("sleeper-previews/", env!("CARGO_PKG_VERSION"));

/// Media type requesting the raw file body from the content API.
pub(crate) const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
/// Media type for content-API directory listings.
pub(crate) const LISTING_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Debug, Clone)]
pub struct PreviewsClient {
    http: Client,
    base_content_api: Url,
    base_raw: Url,
    base_league_api: Url,
}

impl Default for PreviewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl PreviewsClient {
    /// Create a new builder.
    pub fn builder() -> PreviewsClientBuilder {
        PreviewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_content_api(&self) -> &Url {
        &self.base_content_api
    }
    pub(crate) fn base_raw(&self) -> &Url {
        &self.base_raw
    }
    pub(crate) fn base_league_api(&self) -> &Url {
        &self.base_league_api
    }

    /// `GET` a URL with `Cache-Control: no-store`, optionally setting an
    /// `Accept` media type. Status checking is left to the caller so the
    /// transport chain can decide whether to fall back.
    pub(crate) async fn get_no_store(
        &self,
        url: Url,
        accept: Option<&str>,
    ) -> Result<reqwest::Response, PreviewsError> {
        let mut req = self.http.get(url).header("Cache-Control", "no-store");
        if let Some(media) = accept {
            req = req.header("Accept", media);
        }
        Ok(req.send().await?)
    }

    /// Fetch JSON from the league API with no-store and a cache-busting
    /// `t=<unix-millis>` query parameter.
    ///
    /// The busting lives here, inside one explicit method, rather than in a
    /// wrapper around a shared fetch function.
    pub(crate) async fn get_league_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, PreviewsError> {
        let mut url = self.base_league_api.join(path)?;
        url.query_pairs_mut()
            .append_pair("t", &chrono::Utc::now().timestamp_millis().to_string());

        let resp = self.get_no_store(url, None).await?;
        if !resp.status().is_success() {
            return Err(PreviewsError::Status {
                status: resp.status().as_u16(),
                url: resp.url().to_string(),
            });
        }
        let body = crate::core::net::get_text(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PreviewsClientBuilder {
    user_agent: Option<String>,
    base_content_api: Option<Url>,
    base_raw: Option<Url>,
    base_league_api: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PreviewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the content API root (e.g. `https://api.github.com/`).
    #[must_use]
    pub fn base_content_api(mut self, url: Url) -> Self {
        self.base_content_api = Some(url);
        self
    }

    /// Override the raw mirror root (e.g. `https://raw.githubusercontent.com/`).
    #[must_use]
    pub fn base_raw(mut self, url: Url) -> Self {
        self.base_raw = Some(url);
        self
    }

    /// Override the league API root (e.g. `https://api.sleeper.app/v1/`).
    #[must_use]
    pub fn base_league_api(mut self, url: Url) -> Self {
        self.base_league_api = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<PreviewsClient, PreviewsError> {
        let base_content_api = self
            .base_content_api
            .map_or_else(|| Url::parse(DEFAULT_CONTENT_API), ensure_trailing_slash)?;
        let base_raw = self
            .base_raw
            .map_or_else(|| Url::parse(DEFAULT_RAW_MIRROR), ensure_trailing_slash)?;
        let base_league_api = self
            .base_league_api
            .map_or_else(|| Url::parse(DEFAULT_LEAGUE_API), ensure_trailing_slash)?;

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PreviewsClient {
            http,
            base_content_api,
            base_raw,
            base_league_api,
        })
    }
}

// `Url::join` treats a base without a trailing slash as a file and replaces
// its last segment, so bases are normalized on the way in.
fn ensure_trailing_slash(mut url: Url) -> Result<Url, url::ParseError> {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
