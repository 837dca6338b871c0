//! # News Client
//!
//! Fetches top headlines for the home page strip.
//!
//! Headlines are decoration, not commerce: every failure here is
//! recoverable and the caller renders the page without the strip. The
//! client never panics and never blocks checkout.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::AppConfig;

/// News fetch errors.
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key configured; headlines are disabled.
    #[error("News API key not configured")]
    MissingApiKey,

    #[error("News request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("News API returned HTTP {status}")]
    BadStatus { status: u16 },
}

/// A headline for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub url: String,
}

// Wire format of the headlines endpoint

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    url: Option<String>,
    source: ArticleSource,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

/// HTTP client for the headlines endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    country: String,
}

impl NewsClient {
    /// Builds a client from app configuration.
    pub fn new(config: &AppConfig) -> Result<Self, NewsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(NewsClient {
            http,
            base_url: config.news_api_url.clone(),
            api_key: config.news_api_key.clone(),
            country: config.news_country.clone(),
        })
    }

    /// Fetches up to `limit` top headlines.
    ///
    /// Articles without a title or URL are dropped rather than rendered
    /// half-empty.
    pub async fn top_headlines(&self, limit: usize) -> Result<Vec<Headline>, NewsError> {
        let api_key = self.api_key.as_deref().ok_or(NewsError::MissingApiKey)?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("country", self.country.as_str()),
                ("pageSize", &limit.to_string()),
                ("apiKey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: HeadlinesResponse = response.json().await?;

        let headlines: Vec<Headline> = body
            .articles
            .into_iter()
            .filter_map(|a| {
                Some(Headline {
                    title: a.title?,
                    url: a.url?,
                    source: a.source.name.unwrap_or_else(|| "Unknown".to_string()),
                })
            })
            .take(limit)
            .collect();

        debug!(count = headlines.len(), "Fetched headlines");
        Ok(headlines)
    }
}
