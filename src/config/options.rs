// src/config/options.rs
use std::path::PathBuf;

use url::form_urlencoded;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            scrape: ScrapeOptions::for_user(user_id),
            export: ExportOptions::default(),
        }
    }
}

/// Site language. Picks the URL segment and the "rated on" phrasing/month names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self { Language::En => "en", Language::Es => "es" }
    }
}

/// Where the cast list lives inside a movie item. The two listing layouts disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CastSelector {
    /// `<div class="credits">` (list view with date headers)
    #[default]
    Credits,
    /// `<div class="mc-cast">` (older card layout)
    McCast,
}

impl CastSelector {
    pub fn css(&self) -> &'static str {
        match self {
            CastSelector::Credits => "div.credits",
            CastSelector::McCast => "div.mc-cast",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub language: Language,
    pub extract_watched_date: bool,
    pub cast_selector: CastSelector,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            language: Language::En,
            extract_watched_date: true,
            cast_selector: CastSelector::Credits,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub user_id: String,
    pub base_url: String,
    pub extract: ExtractOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            user_id: s!(),
            base_url: s!(BASE_URL),
            extract: ExtractOptions::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }

    /// Listing URL for one page (1-based). The user id is query-encoded.
    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/{}/{}?user_id={}&p={}&{}",
            self.base_url.trim_end_matches('/'),
            self.extract.language.code(),
            LISTING_PATH,
            form_urlencoded::byte_serialize(self.user_id.as_bytes()).collect::<String>(),
            page,
            LISTING_QUERY,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// `--csv`: file name or path; a trailing separator makes it a directory hint.
    pub out: Option<PathBuf>,
    /// `--out-dir`: directory the output lands in (created when missing).
    pub out_dir: Option<PathBuf>,
}

impl ExportOptions {
    pub fn default_filename(user_id: &str) -> String {
        join!(DEFAULT_FILE_PREFIX, user_id, ".", DEFAULT_EXT)
    }
}
