// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::Client;

use crate::cover_art::{CoverArt, COVER_ART_ARCHIVE_BASE};
use crate::error::Result;
use crate::http::HttpClient;
use crate::mbid::Mbid;
use crate::models::ResourceType;

const USER_AGENT: &str = concat!("coverart-archive/", env!("CARGO_PKG_VERSION"));

/// Cover Art Archive client bound to one base URL and HTTP transport.
#[derive(Debug, Clone)]
pub struct CoverArtClient<C = Client> {
    http: C,
    base_url: String,
}

impl CoverArtClient {
    /// Create a client with default settings on top of `reqwest`.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> CoverArtClientBuilder {
        CoverArtClientBuilder::default()
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_http_client(http)
    }
}

impl<C: HttpClient> CoverArtClient<C> {
    /// Use an existing transport against the public archive.
    pub fn with_http_client(http: C) -> Self {
        Self {
            http,
            base_url: COVER_ART_ARCHIVE_BASE.to_string(),
        }
    }

    /// Point the client at a different archive (useful for mirrors and mock servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a listing by resource type name (`"release"` or `"release-group"`).
    ///
    /// # Example
    /// ```no_run
    /// # use coverart_archive::CoverArtClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CoverArtClient::new()?;
    /// let cover_art = client
    ///     .fetch("release-group", "b1392450-e666-3926-a536-22c65f834433")
    ///     .await?;
    /// for image in cover_art.images() {
    ///     println!("{}", image.image_url());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, resource_type: &str, mbid: &str) -> Result<CoverArt> {
        CoverArt::fetch_from(&self.base_url, resource_type, mbid, &self.http).await
    }

    pub async fn fetch_release(&self, mbid: &Mbid) -> Result<CoverArt> {
        CoverArt::retrieve(&self.base_url, ResourceType::Release, mbid.clone(), &self.http).await
    }

    pub async fn fetch_release_group(&self, mbid: &Mbid) -> Result<CoverArt> {
        CoverArt::retrieve(
            &self.base_url,
            ResourceType::ReleaseGroup,
            mbid.clone(),
            &self.http,
        )
        .await
    }
}

/// Builder for a `reqwest`-backed Cover Art Archive client.
#[derive(Debug)]
pub struct CoverArtClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for CoverArtClientBuilder {
    fn default() -> Self {
        Self {
            base_url: COVER_ART_ARCHIVE_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl CoverArtClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CoverArtClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(CoverArtClient::with_http_client(http).with_base_url(self.base_url))
    }
}
