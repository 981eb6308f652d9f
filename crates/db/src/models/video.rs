//! Persisted shape of a video.

use emberlance_core::content::Video;
use mongodb::bson::{doc, Document};

use super::{
    insert_optional, insert_optional_list, optional_string, optional_string_list, published_flag,
    required_string, CoercionError, Publishable, StoredContent, PUBLISHED_FIELD,
};

impl StoredContent for Video {
    fn to_fields(&self) -> Document {
        let mut document = doc! {
            "title": self.title.as_str(),
            "src": self.src.as_str(),
        };
        insert_optional(&mut document, "description", self.description.as_ref());
        document.insert(PUBLISHED_FIELD, self.published);
        insert_optional_list(&mut document, "tags", self.tags.as_ref());
        document
    }

    fn from_document(document: &Document) -> Result<Self, CoercionError> {
        Ok(Self {
            title: required_string(document, "title")?,
            src: required_string(document, "src")?,
            description: optional_string(document, "description"),
            published: published_flag(document),
            tags: optional_string_list(document, "tags"),
        })
    }
}

impl Publishable for Video {}
