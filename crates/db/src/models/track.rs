//! Persisted shape of a track.

use emberlance_core::content::Track;
use mongodb::bson::{doc, Document};

use super::{
    insert_optional, insert_optional_list, optional_string, optional_string_list, published_flag,
    required_string, CoercionError, Publishable, StoredContent, PUBLISHED_FIELD,
};

impl StoredContent for Track {
    fn to_fields(&self) -> Document {
        let mut document = doc! { "title": self.title.as_str() };
        insert_optional(&mut document, "description", self.description.as_ref());
        insert_optional(&mut document, "audio_url", self.audio_url.as_ref());
        insert_optional(&mut document, "video_url", self.video_url.as_ref());
        document.insert(PUBLISHED_FIELD, self.published);
        insert_optional_list(&mut document, "tags", self.tags.as_ref());
        document
    }

    fn from_document(document: &Document) -> Result<Self, CoercionError> {
        Ok(Self {
            title: required_string(document, "title")?,
            description: optional_string(document, "description"),
            audio_url: optional_string(document, "audio_url"),
            video_url: optional_string(document, "video_url"),
            published: published_flag(document),
            tags: optional_string_list(document, "tags"),
        })
    }
}

impl Publishable for Track {}
