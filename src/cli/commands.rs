use crate::app::{AppContext, Result};
use crate::browser::ChromeSession;
use crate::domain::{Service, UpdateDay, WEBTOON_DOC_TYPE};
use crate::listing::ListingFetch;
use crate::reconcile::ReconciliationEngine;
use crate::store::DocumentStore;

pub async fn ingest(
    ctx: &AppContext,
    service: Service,
    update_day: UpdateDay,
    page: u32,
    headed: bool,
) -> Result<()> {
    let records = match ctx.listing.fetch(page, service, update_day).await? {
        ListingFetch::Degraded { status } => {
            println!(
                "Listing API degraded (HTTP {}) for {}/{} page {}; nothing to ingest",
                status, service, update_day, page
            );
            return Ok(());
        }
        ListingFetch::Listed(records) => records,
    };

    if records.is_empty() {
        println!(
            "No listings for {}/{} page {}",
            service, update_day, page
        );
        return Ok(());
    }

    println!(
        "Reconciling {} listings from {}/{} page {}...",
        records.len(),
        service,
        update_day,
        page
    );

    let mut session_config = ctx.config.browser.clone();
    if headed {
        session_config.headless = false;
    }
    let session = ChromeSession::launch(session_config).await?;

    let engine = ReconciliationEngine::new(ctx.store.clone(), session);
    let summary = engine.reconcile(records, service).await?;

    println!(
        "Ingest complete: {} inserted, {} updated, {} skipped",
        summary.inserted, summary.updated, summary.skipped
    );

    Ok(())
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let documents = ctx.store.all_of_type(WEBTOON_DOC_TYPE)?;

    if documents.is_empty() {
        println!("No webtoon documents");
        return Ok(());
    }

    for stored in documents {
        let doc = stored.document;
        println!(
            "{} [{}]\n  genre: {}\n  days: {}",
            doc.title,
            doc.services.join(", "),
            if doc.genre.is_empty() {
                "-".to_string()
            } else {
                doc.genre.join(", ")
            },
            if doc.update_days.is_empty() {
                "-".to_string()
            } else {
                doc.update_days.join(", ")
            }
        );
    }

    Ok(())
}
