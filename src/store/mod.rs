pub mod sqlite;

use crate::app::Result;
use crate::domain::MediaDocument;

pub use sqlite::SqliteStore;

/// A document as it lives in storage. The row id is storage's concern
/// only: it is never copied into merge output and never persisted inside
/// the document itself.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: i64,
    pub document: MediaDocument,
}

/// Capability boundary over the shared media collection. Documents of
/// heterogeneous types share one collection, distinguished by a type
/// discriminant; no merge logic lives here.
pub trait DocumentStore {
    /// Find the single document for a (type, title) pair. Title is the
    /// natural de-duplication key across services.
    fn find_by_title(&self, doc_type: &str, title: &str) -> Result<Option<StoredDocument>>;

    /// Find a document by its upstream identifier field.
    fn find_by_source_id(&self, doc_type: &str, source_id: &str) -> Result<Option<StoredDocument>>;

    /// Insert a new document, returning the storage-assigned row id.
    fn insert(&self, document: &MediaDocument) -> Result<i64>;

    /// Replace the full field set of the document keyed by its upstream
    /// identifier.
    fn update_by_source_id(
        &self,
        doc_type: &str,
        source_id: &str,
        document: &MediaDocument,
    ) -> Result<()>;

    /// All documents of one type, in insertion order.
    fn all_of_type(&self, doc_type: &str) -> Result<Vec<StoredDocument>>;
}
