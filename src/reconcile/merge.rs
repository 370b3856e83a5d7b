//! Per-field combine rules for folding new data into a document.
//!
//! Three sources contribute to one canonical document: the stored copy
//! (the base), the fresh listing record, and the detail-page extraction.
//! Each field follows exactly one named rule, so the whole policy is
//! auditable here without touching any I/O:
//!
//! | field                         | listing source | detail source          |
//! |-------------------------------|----------------|------------------------|
//! | `url[service]`                | key write      | none                   |
//! | `services`, `update_days`     | append-dedup   | none                   |
//! | `author`, `img`               | fill-if-empty  | none                   |
//! | `additional` flags            | overwrite      | none                   |
//! | `additional.singularity_list` | preserve       | none                   |
//! | `genre`                       | none           | append-dedup           |
//! | `summary`, `backdrop_img`     | none           | overwrite when present |
//! | `title`, `webtoon_id`, `rate`, `rates` | preserve | preserve            |

use crate::domain::{ListingRecord, MediaDocument, Service};
use crate::extract::DetailData;

/// Append `incoming` to `current`, then drop repeated values keeping the
/// first occurrence of each. Relative order is never changed.
pub fn extend_dedup(current: &mut Vec<String>, incoming: impl IntoIterator<Item = String>) {
    current.extend(incoming);
    let mut seen = std::collections::HashSet::new();
    current.retain(|v| seen.insert(v.clone()));
}

/// Set `current` from `incoming` only when the stored value is empty and
/// the incoming one is not.
pub fn fill_if_empty(current: &mut String, incoming: &str) {
    if current.is_empty() && !incoming.is_empty() {
        *current = incoming.to_string();
    }
}

/// Fold a fresh listing record into a document loaded from storage.
///
/// The base keeps its identity fields (`webtoon_id`, `title`) and its
/// enrichment/rating state; the listing contributes this service's URL
/// entry, membership in `services`, update days, and current status
/// flags. `singularity_list` stays with the stored document because the
/// listing never supplies an authoritative value for it.
pub fn fold_listing(doc: &mut MediaDocument, record: &ListingRecord, service: Service) {
    doc.url.insert(service.to_string(), record.url.clone());
    extend_dedup(&mut doc.services, [service.to_string()]);
    extend_dedup(&mut doc.update_days, record.update_days.iter().cloned());
    fill_if_empty(&mut doc.author, &record.author);
    fill_if_empty(&mut doc.img, &record.img);

    doc.additional.is_new = record.additional.is_new;
    doc.additional.is_adult = record.additional.is_adult;
    doc.additional.is_hiatus = record.additional.is_hiatus;
    doc.additional.is_trending = record.additional.is_trending;
}

/// Fold a detail-page extraction result into the document.
///
/// Sequences append and dedup; scalars overwrite, but only when the
/// extraction actually produced them, so a page with no summary text
/// never clears a stored summary.
pub fn fold_detail(doc: &mut MediaDocument, detail: DetailData) {
    extend_dedup(&mut doc.genre, detail.genre);
    if let Some(summary) = detail.summary {
        doc.summary = summary;
    }
    if let Some(backdrop) = detail.backdrop_img {
        doc.backdrop_img = Some(backdrop);
    }
}
