//! # Toondex
//!
//! Webtoon catalog ingester: pulls listing pages from an upstream
//! catalog API, enriches each title by rendering its detail page in a
//! shared headless-Chrome session, and reconciles the result with a
//! persistent document store so repeated runs converge instead of
//! duplicating.
//!
//! ## Architecture
//!
//! ```text
//! ListingClient → ReconciliationEngine → (BrowserSession → extract) → DocumentStore
//! ```
//!
//! The [`reconcile::ReconciliationEngine`] is the composition root of a
//! run: it is the only component that touches more than one collaborator,
//! and all cross-cutting rules (adult filter, URL normalization, the
//! per-field merge policy, insert-or-update) live there or in
//! [`reconcile::merge`]. The browser and the store are capability traits
//! so the whole pipeline runs against fakes in tests.
//!
//! ## Modules
//!
//! - [`app`]: application context (dependency wiring) and error type
//! - [`cli`]: clap command definitions and command functions
//! - [`config`]: toml configuration from `~/.config/toondex/config.toml`
//! - [`domain`]: listing wire shapes and the canonical media document
//! - [`listing`]: listing API client ([`listing::ListingFetch`] keeps
//!   "empty page" distinguishable from "upstream degraded")
//! - [`browser`]: shared headless browser session (chromiumoxide)
//! - [`extract`]: pure selector extraction from rendered detail pages
//! - [`store`]: document store trait and SQLite implementation
//! - [`reconcile`]: the per-item reconciliation pipeline and merge rules

pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;
pub mod listing;
pub mod reconcile;
pub mod store;
