// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::{CoverArtError, Result};
use crate::http::{HttpClient, HttpResponse};
use crate::mbid::Mbid;
use crate::models::{CoverArtImage, CoverSide, ResourceType};

pub const COVER_ART_ARCHIVE_BASE: &str = "https://coverartarchive.org";

/// Cover art listing for one release or release group.
///
/// Only obtainable through a successful fetch, so a `CoverArt` value is always
/// fully populated.
#[derive(Debug, Clone)]
pub struct CoverArt {
    mbid: Mbid,
    resource_type: ResourceType,
    release_url: Option<String>,
    images: Vec<CoverArtImage>,
    front: Option<usize>,
    back: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct CoverArtListing {
    #[serde(default)]
    images: Option<Vec<CoverArtImage>>,
    #[serde(default)]
    release: Option<String>,
}

impl CoverArt {
    /// Fetch the cover art listing for `mbid` from the Cover Art Archive.
    ///
    /// `resource_type` must be `"release"` or `"release-group"`. Both
    /// arguments are validated before any request is made.
    ///
    /// # Example
    /// ```no_run
    /// # use coverart_archive::CoverArt;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let http = reqwest::Client::new();
    /// let cover_art = CoverArt::fetch("release", "4dbf5678-7a31-406a-abbe-232f8ac2cd63", &http).await?;
    /// println!("{}", cover_art.front_image()?.image_url());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch<C>(resource_type: &str, mbid: &str, client: &C) -> Result<Self>
    where
        C: HttpClient + ?Sized,
    {
        Self::fetch_from(COVER_ART_ARCHIVE_BASE, resource_type, mbid, client).await
    }

    /// Same as [`CoverArt::fetch`], against a different archive base URL.
    pub async fn fetch_from<C>(
        base_url: &str,
        resource_type: &str,
        mbid: &str,
        client: &C,
    ) -> Result<Self>
    where
        C: HttpClient + ?Sized,
    {
        let resource_type: ResourceType = resource_type.parse()?;
        let mbid = Mbid::parse(mbid)?;
        Self::retrieve(base_url, resource_type, mbid, client).await
    }

    pub(crate) async fn retrieve<C>(
        base_url: &str,
        resource_type: ResourceType,
        mbid: Mbid,
        client: &C,
    ) -> Result<Self>
    where
        C: HttpClient + ?Sized,
    {
        let url = format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            resource_type,
            mbid
        );
        trace!(target: "coverart", "GET {}", url);

        let response = client
            .get(&url, &[("Accept", "application/json")])
            .await?;
        debug!(target: "coverart", "response status: {}", response.status);

        let listing = parse_listing(&response)?;
        let cover_art = Self::populate(
            mbid,
            resource_type,
            listing.release,
            listing.images.unwrap_or_default(),
        );
        debug!(
            target: "coverart",
            images = cover_art.images.len(),
            has_front = cover_art.front.is_some(),
            has_back = cover_art.back.is_some(),
            "cover art listing loaded"
        );

        Ok(cover_art)
    }

    fn populate(
        mbid: Mbid,
        resource_type: ResourceType,
        release_url: Option<String>,
        images: Vec<CoverArtImage>,
    ) -> Self {
        let mut front = None;
        let mut back = None;

        // A later image claiming the same side replaces the earlier one.
        for (index, image) in images.iter().enumerate() {
            if image.is_front() {
                front = Some(index);
            }
            if image.is_back() {
                back = Some(index);
            }
        }

        Self {
            mbid,
            resource_type,
            release_url,
            images,
            front,
            back,
        }
    }

    pub fn mbid(&self) -> &Mbid {
        &self.mbid
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// MusicBrainz URL of the entity, as reported by the archive.
    pub fn release_url(&self) -> Option<&str> {
        self.release_url.as_deref()
    }

    /// All images, in the order the archive listed them.
    pub fn images(&self) -> &[CoverArtImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn front_image(&self) -> Result<&CoverArtImage> {
        self.designated(self.front, CoverSide::Front)
    }

    pub fn back_image(&self) -> Result<&CoverArtImage> {
        self.designated(self.back, CoverSide::Back)
    }

    fn designated(&self, index: Option<usize>, side: CoverSide) -> Result<&CoverArtImage> {
        index
            .and_then(|index| self.images.get(index))
            .ok_or(CoverArtError::NotFound(side))
    }
}

fn parse_listing(response: &HttpResponse) -> Result<CoverArtListing> {
    if response.status != 200 {
        warn!(target: "coverart", status = response.status, "bad response from server");
        return Err(CoverArtError::ServerError {
            status: response.status,
            body: response.body.clone(),
        });
    }

    trace!(target: "coverart", "response body: {}", response.body);

    let value: Value = serde_json::from_str(&response.body).map_err(|e| {
        CoverArtError::InvalidResponse(format!("Failed to parse response: {}", e))
    })?;

    // A listing is always a JSON object, never a sequence.
    if !value.is_object() {
        return Err(CoverArtError::InvalidResponse(format!(
            "Expected a JSON object, got: {}",
            value
        )));
    }

    serde_json::from_value(value).map_err(|e| {
        CoverArtError::InvalidResponse(format!("Failed to parse response: {}", e))
    })
}
