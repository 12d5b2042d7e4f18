// SPDX-License-Identifier: GPL-3.0-or-later

//! Cover Art Archive client for listing release artwork.
//!
//! This crate looks up the cover art listing of a MusicBrainz release or
//! release group on the Cover Art Archive and exposes the images as typed
//! values, with the front and back covers picked out. The HTTP transport is
//! pluggable through the [`HttpClient`] trait; `reqwest::Client` implements it
//! out of the box.

pub mod client;
#[cfg(test)]
mod client_tests;
pub mod cover_art;
pub mod error;
pub mod http;
pub mod mbid;
pub mod models;

pub use client::{CoverArtClient, CoverArtClientBuilder};
pub use cover_art::{CoverArt, COVER_ART_ARCHIVE_BASE};
pub use error::{CoverArtError, Result};
pub use http::{HttpClient, HttpResponse};
pub use mbid::{is_valid_mbid, Mbid};
pub use models::{CoverArtImage, CoverSide, ResourceType, ThumbnailSize, Thumbnails};
