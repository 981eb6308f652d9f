//! Persisted shape of a contact-form submission.

use emberlance_core::content::ContactMessage;
use mongodb::bson::{doc, Document};

use super::{insert_optional, optional_string, required_string, CoercionError, StoredContent};

impl StoredContent for ContactMessage {
    fn to_fields(&self) -> Document {
        let mut document = doc! {
            "name": self.name.as_str(),
            "email": self.email.as_str(),
            "message": self.message.as_str(),
        };
        insert_optional(&mut document, "source", self.source.as_ref());
        document
    }

    fn from_document(document: &Document) -> Result<Self, CoercionError> {
        Ok(Self {
            name: required_string(document, "name")?,
            email: required_string(document, "email")?,
            message: required_string(document, "message")?,
            source: optional_string(document, "source"),
        })
    }
}
