//! Content contracts: the typed shapes of everything that crosses the API
//! boundary.
//!
//! Each contract derives [`Validate`]; [`ContentContract::check`] runs every
//! rule and reports all violated fields together. Optional fields are
//! `Option`s so "absent" stays distinct from "empty string".

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::Collection;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

pub const NAME_MAX_LEN: u64 = 120;
pub const MESSAGE_MAX_LEN: u64 = 5000;
pub const TITLE_MAX_LEN: u64 = 200;
pub const DESCRIPTION_MAX_LEN: u64 = 1000;

/// `published` defaults to true, both on input and when a stored record
/// predates the field.
pub const PUBLISHED_DEFAULT: bool = true;

fn default_published() -> bool {
    PUBLISHED_DEFAULT
}

// ---------------------------------------------------------------------------
// Contract trait
// ---------------------------------------------------------------------------

/// A validated entity shape bound to its collection.
pub trait ContentContract: Validate {
    const COLLECTION: Collection;

    /// Run every validation rule, collecting all violations.
    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// A contact-form submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = NAME_MAX_LEN, message = "must be between 1 and 120 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = MESSAGE_MAX_LEN, message = "must be between 1 and 5000 characters"))]
    pub message: String,
    /// Where the message came from (page, campaign, etc.).
    #[serde(default)]
    pub source: Option<String>,
}

impl ContentContract for ContactMessage {
    const COLLECTION: Collection = Collection::ContactMessage;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Track {
    #[validate(length(min = 1, max = TITLE_MAX_LEN, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN, message = "must be at most 1000 characters"))]
    pub description: Option<String>,
    /// Path or URL to the audio file.
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Path or URL to a related video.
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ContentContract for Track {
    const COLLECTION: Collection = Collection::Track;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Video {
    #[validate(length(min = 1, max = TITLE_MAX_LEN, message = "must be between 1 and 200 characters"))]
    pub title: String,
    /// Path or URL to the video file.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub src: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN, message = "must be at most 1000 characters"))]
    pub description: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ContentContract for Video {
    const COLLECTION: Collection = Collection::Video;
}
