// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching for listing and detail pages

use async_trait::async_trait;
use reqwest::Client;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::{debug, info};
use url::{Host, Url};

use super::config::RecipeConfig;
use super::rate_limiter::UpstreamRateLimiter;

/// Page fetch error types
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Request timed out
    Timeout(String),
    /// HTTP request error
    HttpError(String),
    /// HTTP non-success status
    HttpStatus(u16, String),
    /// URL could not be parsed
    InvalidUrl(String),
    /// URL is unsafe (localhost, private IP)
    UnsafeUrl(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(url) => write!(f, "Timeout fetching: {}", url),
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::HttpStatus(code, url) => write!(f, "HTTP {} for: {}", code, url),
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            Self::UnsafeUrl(url) => write!(f, "Unsafe URL blocked: {}", url),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of raw page HTML
///
/// The HTTP implementation is [`HttpPageFetcher`]; tests substitute canned
/// pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page body, failing on transport errors and non-success status
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a browser User-Agent, timeout and pacing
pub struct HttpPageFetcher {
    client: Client,
    rate_limiter: UpstreamRateLimiter,
}

impl HttpPageFetcher {
    /// Create a new page fetcher from configuration
    pub fn new(config: &RecipeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            rate_limiter: UpstreamRateLimiter::new(config.rate_limit_per_minute),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        if !self.rate_limiter.try_acquire() {
            debug!(
                "Upstream budget of {}/min reached, waiting",
                self.rate_limiter.requests_per_minute()
            );
            self.rate_limiter.wait().await;
        }
        debug!("Fetching page: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        info!("Fetched {} bytes from: {}", html.len(), url);
        Ok(html)
    }
}

/// Check that a caller-supplied URL is http(s) and not loopback/private
pub fn check_safe_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

    if !["http", "https"].contains(&parsed.scheme()) {
        return Err(FetchError::UnsafeUrl(url.to_string()));
    }

    let blocked = match parsed.host() {
        None => true,
        Some(Host::Domain(domain)) => {
            let domain = domain.to_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => is_internal_v4(ip),
        Some(Host::Ipv6(ip)) => is_internal_v6(ip),
    };

    if blocked {
        return Err(FetchError::UnsafeUrl(url.to_string()));
    }
    Ok(parsed)
}

fn is_internal_v4(ip: Ipv4Addr) -> bool {
    ip.is_loopback() || ip.is_private() || ip.is_link_local() || ip.is_unspecified()
}

fn is_internal_v6(ip: Ipv6Addr) -> bool {
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_internal_v4(v4);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        || (first & 0xfe00) == 0xfc00 // unique local
        || (first & 0xffc0) == 0xfe80 // link-local
}
