use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Additional, ListingRecord, Service};

/// Discriminant value for webtoon documents in the shared media collection.
pub const WEBTOON_DOC_TYPE: &str = "webtoon";

/// One user rating attached to a document. Never written by this
/// subsystem, only carried across merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub user: String,
    pub rate: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Canonical persisted representation of one title across every service
/// that carries it.
///
/// `url` maps service name to that service's detail URL, so a second
/// service adds a key instead of a second document. `genre`, `services`
/// and `update_days` are semantically sets kept as first-occurrence-order
/// sequences. The storage row id is not part of the document; see
/// [`StoredDocument`](crate::store::StoredDocument).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(rename = "webtoonId")]
    pub webtoon_id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: BTreeMap<String, String>,
    #[serde(default)]
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_img: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(rename = "updateDays", default)]
    pub update_days: Vec<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub rates: Vec<RatingEntry>,
    #[serde(default)]
    pub additional: Additional,
}

impl MediaDocument {
    /// Build a fresh document from a listing record first seen via
    /// `service`. The record's URL is expected to be normalized already.
    ///
    /// Seeding rules: `services` becomes a one-element list and `url` a
    /// one-entry map keyed by the service name; everything else is copied
    /// from the record as-is. Summary, genre and ratings start empty and
    /// are filled by later enrichment or user activity.
    pub fn from_listing(record: &ListingRecord, service: Service) -> Self {
        Self {
            doc_type: WEBTOON_DOC_TYPE.to_string(),
            webtoon_id: record.webtoon_id.clone(),
            title: record.title.clone(),
            summary: String::new(),
            genre: Vec::new(),
            author: record.author.clone(),
            url: BTreeMap::from([(service.to_string(), record.url.clone())]),
            img: record.img.clone(),
            backdrop_img: None,
            services: vec![service.to_string()],
            update_days: dedup(record.update_days.clone()),
            rate: 0.0,
            rates: Vec::new(),
            additional: record.additional.clone(),
        }
    }
}

fn dedup(mut values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
    values
}
