// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

use crate::models::CoverSide;

pub type Result<T> = std::result::Result<T, CoverArtError>;

#[derive(Debug, Error)]
pub enum CoverArtError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Bad response from server: {status} - {body}")]
    ServerError { status: u16, body: String },

    #[error("Invalid response from Cover Art Archive: {0}")]
    InvalidResponse(String),

    #[error("No {0} image was found")]
    NotFound(CoverSide),
}

impl CoverArtError {
    /// Wrap an error raised by an [`HttpClient`](crate::HttpClient) implementation.
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }
}

impl From<reqwest::Error> for CoverArtError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(Box::new(error))
    }
}
