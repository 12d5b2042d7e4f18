// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::CoverArtError;

/// MusicBrainz entity kinds the Cover Art Archive serves listings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Release,
    ReleaseGroup,
}

impl ResourceType {
    /// Path segment used in Cover Art Archive URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
        }
    }
}

impl FromStr for ResourceType {
    type Err = CoverArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(Self::Release),
            "release-group" => Ok(Self::ReleaseGroup),
            other => Err(CoverArtError::InvalidArgument(format!(
                "Invalid resource type {other:?}, expected \"release\" or \"release-group\""
            ))),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the packaging an image is designated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverSide {
    Front,
    Back,
}

impl fmt::Display for CoverSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Thumbnail sizes generated by the Cover Art Archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbnailSize {
    /// 250px
    Small,
    /// 500px
    #[default]
    Large,
    /// 1200px, only generated for newer uploads
    ExtraLarge,
}

impl ThumbnailSize {
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Small => 250,
            Self::Large => 500,
            Self::ExtraLarge => 1200,
        }
    }
}

/// Thumbnail URLs for a single image.
///
/// Older listings only carry the `small` / `large` keys, newer ones carry the
/// numeric keys as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(rename = "250", default)]
    pub px250: Option<String>,
    #[serde(rename = "500", default)]
    pub px500: Option<String>,
    #[serde(rename = "1200", default)]
    pub px1200: Option<String>,
}

impl Thumbnails {
    pub fn get(&self, size: ThumbnailSize) -> Option<&str> {
        match size {
            ThumbnailSize::Small => self.px250.as_deref().or(self.small.as_deref()),
            ThumbnailSize::Large => self.px500.as_deref().or(self.large.as_deref()),
            ThumbnailSize::ExtraLarge => self.px1200.as_deref(),
        }
    }
}

/// One image entry from a Cover Art Archive listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoverArtImage {
    #[serde(default, deserialize_with = "deserialize_image_id")]
    id: Option<String>,
    image: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(default, deserialize_with = "deserialize_flag")]
    front: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    back: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    approved: bool,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    edit: Option<u64>,
}

impl CoverArtImage {
    /// Archive image id. Listings encode it as either a number or a string.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// URL of the full-size image.
    pub fn image_url(&self) -> &str {
        &self.image
    }

    pub fn thumbnails(&self) -> &Thumbnails {
        &self.thumbnails
    }

    /// Thumbnail URL for `size`, or the full-size image when the archive has
    /// not generated that thumbnail.
    pub fn url_for(&self, size: ThumbnailSize) -> &str {
        self.thumbnails.get(size).unwrap_or(&self.image)
    }

    pub fn is_front(&self) -> bool {
        self.front
    }

    pub fn is_back(&self) -> bool {
        self.back
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Image types such as `Front`, `Back`, `Booklet` or `Medium`.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|comment| !comment.is_empty())
    }

    /// MusicBrainz edit that added the image.
    pub fn edit(&self) -> Option<u64> {
        self.edit
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImageId {
    Number(u64),
    Text(String),
}

fn deserialize_image_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawImageId>::deserialize(deserializer)?.map(|id| match id {
        RawImageId::Number(number) => number.to_string(),
        RawImageId::Text(text) => text,
    }))
}

// Listings occasionally carry `null` flags; those read as unset.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
