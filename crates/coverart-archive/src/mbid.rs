// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::error::{CoverArtError, Result};

lazy_static! {
    // 8-4-4-4-12 hex groups, braces only as a matched pair.
    static ref MBID_REGEX: Regex = Regex::new(
        r"(?i)^(?:\{[0-9a-f]{8}(?:-[0-9a-f]{4}){3}-[0-9a-f]{12}\}|[0-9a-f]{8}(?:-[0-9a-f]{4}){3}-[0-9a-f]{12})$"
    )
    .expect("valid mbid regex");
}

/// Check whether `candidate` is a syntactically valid MusicBrainz identifier.
///
/// Accepts the hyphenated UUID layout, upper or lower case, optionally wrapped
/// in a matched pair of braces. The simple (unhyphenated) and URN layouts are
/// rejected.
pub fn is_valid_mbid(candidate: &str) -> bool {
    MBID_REGEX.is_match(candidate)
}

/// A validated MusicBrainz identifier.
///
/// Keeps the string as supplied, so requests are issued with exactly the
/// identifier the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mbid {
    raw: String,
    uuid: Uuid,
}

impl Mbid {
    pub fn parse(candidate: &str) -> Result<Self> {
        if !is_valid_mbid(candidate) {
            return Err(CoverArtError::InvalidArgument(format!(
                "Invalid MusicBrainz ID: {candidate:?}"
            )));
        }

        let bare = candidate.trim_start_matches('{').trim_end_matches('}');
        let uuid = Uuid::parse_str(bare)
            .map_err(|e| CoverArtError::InvalidArgument(format!("Invalid MusicBrainz ID: {e}")))?;

        Ok(Self {
            raw: candidate.to_string(),
            uuid,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn to_uuid(&self) -> Uuid {
        self.uuid
    }
}

impl From<Uuid> for Mbid {
    fn from(uuid: Uuid) -> Self {
        Self {
            raw: uuid.hyphenated().to_string(),
            uuid,
        }
    }
}

impl FromStr for Mbid {
    type Err = CoverArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Mbid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
