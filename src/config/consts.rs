// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.filmaffinity.com";
pub const LISTING_PATH: &str = "userratings.php";
// orderby=4 → by rating date, chv=list → list view (the only layout parsed)
pub const LISTING_QUERY: &str = "orderby=4&chv=list";
pub const USER_AGENT: &str = concat!("fa_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const FIRST_PAGE: u32 = 1;
pub const NO_TITLE: &str = "(No title)";

// Export
pub const DEFAULT_FILE_PREFIX: &str = "filmAffinity_";
pub const DEFAULT_EXT: &str = "csv";
