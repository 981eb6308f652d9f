//! Integration tests for the document access layer.
//!
//! Exercises `DocumentRepo` and `ContentRepo` against the in-process store:
//! - Timestamping and id normalization on create
//! - Read-your-write through list
//! - The `published` filter and its default for unset records
//! - Limits
//! - Consistency and availability failures

use std::collections::HashSet;

use assert_matches::assert_matches;
use async_trait::async_trait;
use emberlance_core::collection::Collection;
use emberlance_core::content::{ContactMessage, Track, Video};
use emberlance_db::filter::Filter;
use emberlance_db::repositories::{ContentRepo, DocumentRepo};
use emberlance_db::{DbError, DocumentStore, MemoryStore};
use mongodb::bson::{doc, Bson, Document};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_track(title: &str, published: bool) -> Track {
    Track {
        title: title.to_string(),
        description: None,
        audio_url: None,
        video_url: None,
        published,
        tags: None,
    }
}

fn new_video(title: &str) -> Video {
    Video {
        title: title.to_string(),
        src: format!("/videos/{title}.mp4"),
        description: None,
        published: true,
        tags: Some(vec!["demo".into()]),
    }
}

fn new_contact(name: &str) -> ContactMessage {
    ContactMessage {
        name: name.to_string(),
        email: "listener@example.com".to_string(),
        message: "Loved the set".to_string(),
        source: Some("footer".to_string()),
    }
}

/// Accepts inserts but never finds anything afterwards.
struct ForgetfulStore;

#[async_trait]
impl DocumentStore for ForgetfulStore {
    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<Bson, DbError> {
        Ok(Bson::String("ghost".into()))
    }

    async fn find_by_id(&self, _collection: &str, _id: &Bson) -> Result<Option<Document>, DbError> {
        Ok(None)
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &Filter,
        _limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        Ok(Vec::new())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// Fails every operation as an unreachable server would.
struct DownStore;

#[async_trait]
impl DocumentStore for DownStore {
    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<Bson, DbError> {
        Err(DbError::Unavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _collection: &str, _id: &Bson) -> Result<Option<Document>, DbError> {
        Err(DbError::Unavailable("connection refused".into()))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &Filter,
        _limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        Err(DbError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Unavailable("connection refused".into()))
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_issues_distinct_ids_and_equal_timestamps() {
    let store = MemoryStore::new();
    let mut seen = HashSet::new();

    for name in ["Ada", "Ada", "Grace"] {
        let record = ContentRepo::create(&store, &new_contact(name)).await.unwrap();

        assert!(!record.id.is_empty());
        assert!(seen.insert(record.id.clone()), "id {} issued twice", record.id);
        assert!(record.created_at.is_some());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.fields.get_str("name").unwrap(), name);
        assert_eq!(record.fields.get_str("source").unwrap(), "footer");
        assert!(!record.fields.contains_key("_id"));
    }

    assert_eq!(store.count(Collection::ContactMessage.name()).await, 3);
}

#[tokio::test]
async fn create_returns_what_the_store_persisted() {
    let store = MemoryStore::new();
    let record = DocumentRepo::create(&store, Collection::Track, doc! { "title": "Raw" })
        .await
        .unwrap();

    let docs = store
        .find(Collection::Track.name(), &Filter::new(), 10)
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), record.id);
    assert!(docs[0].get_datetime("created_at").is_ok());
    assert_eq!(docs[0].get("created_at"), docs[0].get("updated_at"));
}

#[tokio::test]
async fn missing_read_back_is_not_found() {
    let err = DocumentRepo::create(&ForgetfulStore, Collection::Video, doc! { "title": "x" })
        .await
        .unwrap_err();
    assert_matches!(err, DbError::NotFound { collection: "video", ref id } if id == "ghost");
}

#[tokio::test]
async fn store_failure_surfaces_immediately() {
    let err = ContentRepo::create(&DownStore, &new_track("Ember", true))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Unavailable(_));

    let err = ContentRepo::list::<Track>(&DownStore, true, None)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Unavailable(_));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_content_is_listed() {
    let store = MemoryStore::new();
    let track = new_track("Ember", true);
    let video = new_video("clip");

    ContentRepo::create(&store, &track).await.unwrap();
    ContentRepo::create(&store, &video).await.unwrap();

    let tracks = ContentRepo::list::<Track>(&store, false, None).await.unwrap();
    assert!(tracks.contains(&track));

    let videos = ContentRepo::list::<Video>(&store, false, None).await.unwrap();
    assert!(videos.contains(&video));

    let records = DocumentRepo::list(&store, Collection::Track, &Filter::new(), None)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn published_filter_excludes_explicitly_unpublished() {
    let store = MemoryStore::new();
    ContentRepo::create(&store, &new_track("Live", true)).await.unwrap();
    ContentRepo::create(&store, &new_track("Draft", false)).await.unwrap();

    let published = ContentRepo::list::<Track>(&store, true, Some(50)).await.unwrap();
    assert_eq!(published.len(), 1);
    assert!(published.iter().all(|t| t.published));

    let everything = ContentRepo::list::<Track>(&store, false, Some(50)).await.unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn records_without_published_flag_count_as_published() {
    let store = MemoryStore::new();
    store
        .insert_one(Collection::Track.name(), doc! { "title": "Legacy" })
        .await
        .unwrap();

    let tracks = ContentRepo::list::<Track>(&store, true, None).await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Legacy");
    assert!(tracks[0].published);
}

#[tokio::test]
async fn non_boolean_published_flag_lists_consistently() {
    let store = MemoryStore::new();
    store
        .insert_one(Collection::Track.name(), doc! { "title": "Odd", "published": "yes" })
        .await
        .unwrap();

    let everything = ContentRepo::list::<Track>(&store, false, None).await.unwrap();
    assert_eq!(everything.len(), 1);
    assert!(everything[0].published);

    let published = ContentRepo::list::<Track>(&store, true, None).await.unwrap();
    assert_eq!(published, everything);
}

#[tokio::test]
async fn limit_caps_results() {
    let store = MemoryStore::new();
    for i in 0..5 {
        ContentRepo::create(&store, &new_track(&format!("t{i}"), true))
            .await
            .unwrap();
    }

    let one = DocumentRepo::list(&store, Collection::Track, &Filter::new(), Some(1))
        .await
        .unwrap();
    assert_eq!(one.len(), 1);

    let tracks = ContentRepo::list::<Track>(&store, true, Some(3)).await.unwrap();
    assert_eq!(tracks.len(), 3);
}

#[tokio::test]
async fn unshapeable_records_are_skipped() {
    let store = MemoryStore::new();
    store
        .insert_one(Collection::Video.name(), doc! { "title": "No source" })
        .await
        .unwrap();
    ContentRepo::create(&store, &new_video("ok")).await.unwrap();

    let videos = ContentRepo::list::<Video>(&store, true, None).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "ok");
}

#[tokio::test]
async fn collections_are_isolated() {
    let store = MemoryStore::new();
    ContentRepo::create(&store, &new_track("Ember", true)).await.unwrap();

    let videos = ContentRepo::list::<Video>(&store, false, None).await.unwrap();
    assert!(videos.is_empty());
}
