//! End-to-end reconciliation tests: real merge logic and SQLite store,
//! canned browser session.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use toondex::app::{Result, ToondexError};
use toondex::browser::BrowserSession;
use toondex::domain::{
    Additional, ListingRecord, MediaDocument, RatingEntry, Service, WEBTOON_DOC_TYPE,
};
use toondex::reconcile::ReconciliationEngine;
use toondex::store::{DocumentStore, SqliteStore};

const KAKAO_ALPHA_PAGE: &str = r#"
    <html><body>
    <div id="root">
      <main>
        <div>
          <div>
            <picture><img src="https://cdn.example/alpha-backdrop.jpg"></picture>
            <div>
              <div>
                <div>
                  <div>
                    <div>
                      <div>Alpha</div>
                      <div><div><p>A hero rises.</p></div></div>
                      <div><div><a>#action</a><a>#drama</a></div></div>
                    </div>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </main>
    </div>
    </body></html>
"#;

// Genre tags but no summary paragraph: the extraction result carries no
// summary, so a stored one must survive the merge.
const NAVER_ALPHA_PAGE: &str = r#"
    <html><body>
    <div id="content">
      <div>
        <div>
          <div>
            <div>
              <div><a>#drama</a><a>#fantasy</a></div>
            </div>
          </div>
        </div>
      </div>
    </div>
    </body></html>
"#;

/// Serves canned pages by exact URL and records every navigation.
struct FixtureBrowser {
    pages: HashMap<String, String>,
    visited: Arc<Mutex<Vec<String>>>,
}

impl FixtureBrowser {
    fn new(pages: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            visited: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl BrowserSession for FixtureBrowser {
    async fn navigate_and_render(&self, url: &str) -> Result<String> {
        self.visited.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ToondexError::Browser(format!("no fixture for {}", url)))
    }
}

fn kakao_listing() -> ListingRecord {
    ListingRecord {
        webtoon_id: "kakao-1".into(),
        title: "Alpha".into(),
        author: "Kim".into(),
        url: "https://x/alpha".into(),
        img: "https://x/alpha.jpg".into(),
        service: "kakao".into(),
        update_days: vec!["mon".into()],
        additional: Additional::default(),
    }
}

fn naver_listing() -> ListingRecord {
    ListingRecord {
        webtoon_id: "naver-9".into(),
        title: "Alpha".into(),
        author: "Kim".into(),
        url: "https://m.comic/x/alpha".into(),
        img: "https://naver.example/alpha.jpg".into(),
        service: "naver".into(),
        update_days: vec!["tue".into()],
        additional: Additional::default(),
    }
}

#[tokio::test]
async fn first_sighting_inserts_enriched_document() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let browser = FixtureBrowser::new([("https://x/alpha?tab=profile", KAKAO_ALPHA_PAGE)]);
    let engine = ReconciliationEngine::new(store.clone(), browser);

    let summary = engine
        .reconcile(vec![kakao_listing()], Service::Kakao)
        .await
        .unwrap();
    assert_eq!((summary.inserted, summary.updated, summary.skipped), (1, 0, 0));

    let stored = store
        .find_by_title(WEBTOON_DOC_TYPE, "Alpha")
        .unwrap()
        .unwrap();
    let doc = stored.document;

    assert_eq!(doc.webtoon_id, "kakao-1");
    assert_eq!(
        doc.url.get("kakao").map(String::as_str),
        Some("https://x/alpha?tab=profile")
    );
    assert_eq!(doc.services, vec!["kakao"]);
    assert_eq!(doc.genre, vec!["action", "drama"]);
    assert_eq!(doc.summary, "A hero rises.");
    assert_eq!(
        doc.backdrop_img.as_deref(),
        Some("https://cdn.example/alpha-backdrop.jpg")
    );
    assert_eq!(doc.rate, 0.0);
    assert!(doc.rates.is_empty());
}

#[tokio::test]
async fn second_service_merges_into_same_document() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());

    let kakao_browser = FixtureBrowser::new([("https://x/alpha?tab=profile", KAKAO_ALPHA_PAGE)]);
    ReconciliationEngine::new(store.clone(), kakao_browser)
        .reconcile(vec![kakao_listing()], Service::Kakao)
        .await
        .unwrap();

    let naver_browser = FixtureBrowser::new([("https://comic/x/alpha", NAVER_ALPHA_PAGE)]);
    let summary = ReconciliationEngine::new(store.clone(), naver_browser)
        .reconcile(vec![naver_listing()], Service::Naver)
        .await
        .unwrap();
    assert_eq!((summary.inserted, summary.updated, summary.skipped), (0, 1, 0));

    let all = store.all_of_type(WEBTOON_DOC_TYPE).unwrap();
    assert_eq!(all.len(), 1, "one title must stay one document");

    let doc = &all[0].document;
    assert_eq!(doc.url.len(), 2);
    assert_eq!(
        doc.url.get("kakao").map(String::as_str),
        Some("https://x/alpha?tab=profile")
    );
    assert_eq!(
        doc.url.get("naver").map(String::as_str),
        Some("https://comic/x/alpha")
    );
    assert_eq!(doc.services, vec!["kakao", "naver"]);
    assert_eq!(doc.genre, vec!["action", "drama", "fantasy"]);
    // The naver page had no summary text, so the stored one survives.
    assert_eq!(doc.summary, "A hero rises.");
    assert_eq!(doc.update_days, vec!["mon", "tue"]);
    // The identifier of the first sighting keeps keying the document.
    assert_eq!(doc.webtoon_id, "kakao-1");
}

#[tokio::test]
async fn repeated_run_converges() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());

    let run = |store: Arc<SqliteStore>| async move {
        let browser = FixtureBrowser::new([("https://x/alpha?tab=profile", KAKAO_ALPHA_PAGE)]);
        ReconciliationEngine::new(store, browser)
            .reconcile(vec![kakao_listing()], Service::Kakao)
            .await
            .unwrap()
    };

    let first = run(store.clone()).await;
    assert_eq!(first.inserted, 1);
    let after_first = store.all_of_type(WEBTOON_DOC_TYPE).unwrap();

    let second = run(store.clone()).await;
    assert_eq!((second.inserted, second.updated), (0, 1));
    let after_second = store.all_of_type(WEBTOON_DOC_TYPE).unwrap();

    assert_eq!(after_second.len(), 1);
    assert_eq!(after_first[0].document, after_second[0].document);
}

#[tokio::test]
async fn adult_listing_never_touches_browser_or_store() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let browser = FixtureBrowser::new([]);
    let visited = browser.visited.clone();

    let mut record = kakao_listing();
    record.additional.is_adult = true;

    let engine = ReconciliationEngine::new(store.clone(), browser);
    let summary = engine.reconcile(vec![record], Service::Kakao).await.unwrap();

    assert_eq!((summary.inserted, summary.updated, summary.skipped), (0, 0, 1));
    assert!(store.all_of_type(WEBTOON_DOC_TYPE).unwrap().is_empty());
    assert!(visited.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ratings_survive_reconciliation() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());

    let mut seeded = MediaDocument::from_listing(&kakao_listing(), Service::Kakao);
    seeded.url = [("kakao".to_string(), "https://x/alpha?tab=profile".to_string())]
        .into_iter()
        .collect();
    seeded.rate = 4.2;
    seeded.rates = vec![RatingEntry {
        user: "u1".into(),
        rate: 5.0,
        comment: Some("great".into()),
    }];
    seeded.additional.singularity_list = vec!["waitfree".into()];
    store.insert(&seeded).unwrap();

    let browser = FixtureBrowser::new([("https://x/alpha?tab=profile", KAKAO_ALPHA_PAGE)]);
    ReconciliationEngine::new(store.clone(), browser)
        .reconcile(vec![kakao_listing()], Service::Kakao)
        .await
        .unwrap();

    let doc = store
        .find_by_title(WEBTOON_DOC_TYPE, "Alpha")
        .unwrap()
        .unwrap()
        .document;

    assert_eq!(doc.rate, 4.2);
    assert_eq!(doc.rates.len(), 1);
    assert_eq!(doc.rates[0].user, "u1");
    assert_eq!(doc.additional.singularity_list, vec!["waitfree"]);
    // Enrichment still lands alongside the preserved ratings.
    assert_eq!(doc.genre, vec!["action", "drama"]);
    assert_eq!(doc.summary, "A hero rises.");
}

#[tokio::test]
async fn navigation_failure_aborts_run_keeping_prior_items() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    // Only Alpha has a fixture; Beta's navigation fails.
    let browser = FixtureBrowser::new([("https://x/alpha?tab=profile", KAKAO_ALPHA_PAGE)]);

    let mut beta = kakao_listing();
    beta.webtoon_id = "kakao-2".into();
    beta.title = "Beta".into();
    beta.url = "https://x/beta".into();

    let engine = ReconciliationEngine::new(store.clone(), browser);
    let result = engine
        .reconcile(vec![kakao_listing(), beta], Service::Kakao)
        .await;

    assert!(result.is_err());
    // The item persisted before the failure stays persisted.
    let all = store.all_of_type(WEBTOON_DOC_TYPE).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].document.title, "Alpha");
}
