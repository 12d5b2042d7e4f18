// SPDX-License-Identifier: GPL-3.0-or-later

use async_trait::async_trait;

use crate::error::Result;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Minimal HTTP transport used to reach the Cover Art Archive.
///
/// Connection handling, TLS, redirects and timeouts are the implementor's
/// concern. Transport failures should be reported as
/// [`CoverArtError::Transport`](crate::CoverArtError::Transport); a response
/// with any status code is a successful exchange.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request with the given extra headers.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let mut request = reqwest::Client::get(self, url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
