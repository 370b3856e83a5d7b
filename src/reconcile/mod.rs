//! Reconciliation of listing records against the document store.
//!
//! For every record of one listing page: filter, normalize the detail
//! URL, render the page in the shared browser session, load any stored
//! document for the same title, fold listing and extraction data in
//! under the rules of [`merge`], and insert or update. Items are
//! processed strictly one at a time: the browser session can only be at
//! one location, and reusing it across the run amortizes launch cost.

pub mod merge;

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::Result;
use crate::browser::BrowserSession;
use crate::domain::{ListingRecord, MediaDocument, Service, WEBTOON_DOC_TYPE};
use crate::extract;
use crate::store::DocumentStore;

/// Outcome counts of one reconciliation run. A navigation or store
/// failure aborts the run with an error instead of being counted;
/// already-persisted items stay persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

pub struct ReconciliationEngine<S, B> {
    store: Arc<S>,
    browser: B,
}

impl<S: DocumentStore, B: BrowserSession> ReconciliationEngine<S, B> {
    /// The engine owns the browser session for the run's duration; the
    /// store is the shared process-lifetime connection.
    pub fn new(store: Arc<S>, browser: B) -> Self {
        Self { store, browser }
    }

    /// Reconcile every record of one listing page, in order.
    pub async fn reconcile(
        &self,
        records: Vec<ListingRecord>,
        service: Service,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for mut record in records {
            // Adult titles sit behind login and are excluded from
            // persistence entirely: no navigation, no store access.
            if record.additional.is_adult {
                debug!(title = %record.title, "skipping adult-flagged listing");
                summary.skipped += 1;
                continue;
            }

            record.url = normalize_detail_url(record.url, service);

            let html = self.browser.navigate_and_render(&record.url).await?;

            let existing = self.store.find_by_title(WEBTOON_DOC_TYPE, &record.title)?;
            let mut doc = match &existing {
                Some(stored) => {
                    let mut base = stored.document.clone();
                    merge::fold_listing(&mut base, &record, service);
                    base
                }
                None => MediaDocument::from_listing(&record, service),
            };

            if let Some(detail) = extract::detail(&html, service) {
                merge::fold_detail(&mut doc, detail);
            }

            match existing {
                Some(_) => {
                    self.store
                        .update_by_source_id(WEBTOON_DOC_TYPE, &doc.webtoon_id, &doc)?;
                    info!(title = %doc.title, service = %service, "updated document");
                    summary.updated += 1;
                }
                None => {
                    self.store.insert(&doc)?;
                    info!(title = %doc.title, service = %service, "inserted document");
                    summary.inserted += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Rewrite a listing URL into the address the detail page is actually
/// rendered at. Kakao pages need the profile tab query to expose genre
/// and summary; naver listings point at the mobile site, which lays out
/// differently from the desktop page the selectors target. Empty URLs
/// pass through untouched.
pub fn normalize_detail_url(url: String, service: Service) -> String {
    if url.is_empty() {
        return url;
    }
    match service {
        Service::Kakao => format!("{url}?tab=profile"),
        Service::Naver => url.replacen("m.comic", "comic", 1),
    }
}
