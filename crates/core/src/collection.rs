//! The fixed set of document collections.
//!
//! Every persisted record belongs to exactly one collection, chosen when it
//! is created. Collection names are the lowercased entity names.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    ContactMessage,
    Track,
    Video,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::ContactMessage, Self::Track, Self::Video];

    /// Name of the collection in the document store.
    pub fn name(self) -> &'static str {
        match self {
            Self::ContactMessage => "contactmessage",
            Self::Track => "track",
            Self::Video => "video",
        }
    }

    /// Entity label used in logs and error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::ContactMessage => "ContactMessage",
            Self::Track => "Track",
            Self::Video => "Video",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
