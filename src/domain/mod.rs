pub mod document;
pub mod listing;

pub use document::{MediaDocument, RatingEntry, WEBTOON_DOC_TYPE};
pub use listing::{Additional, ListingRecord, Service, UpdateDay};
