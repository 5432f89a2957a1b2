// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the data
//! lives in the HTML* of one page and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page body (no network, no files).
//! - **Selector choice**, kept in one table per page so a markup change is a
//!   one-line fix.
//! - **Tolerant extraction**: every field degrades to an empty string on its
//!   own; a missing sub-element never drops the whole row.
//!
//! ## What does **not** live here
//! - Pagination and stop conditions (`scrape`).
//! - Output formatting (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_ratings → PageSource::fetch
//!                                  ↘ specs::ratings::parse_page
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against small synthetic fixtures.
pub mod ratings;
