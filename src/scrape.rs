// src/scrape.rs
//
// Page loop: fetch page N, extract, append, N += 1 until a page is empty or
// comes back with a non-success status. Strictly sequential.

use crate::config::consts::FIRST_PAGE;
use crate::config::options::ScrapeOptions;
use crate::core::net::PageSource;
use crate::error::Result;
use crate::progress::Progress;
use crate::record::RatingRecord;
use crate::specs::ratings::parse_page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Page had no rating rows: normal end of the listing.
    EmptyPage { page: u32 },
    /// Server answered with a non-2xx status. That page's body is never parsed.
    HttpStatus { page: u32, status: u16 },
}

#[derive(Debug)]
pub struct Collected {
    /// All records, page order then row order.
    pub records: Vec<RatingRecord>,
    /// Pages whose rows were included.
    pub pages: u32,
    pub stop: StopReason,
}

/// Collect every rating for `opts.user_id`, starting again from page 1.
/// Only transport errors are returned as `Err`; a bad status just ends the run.
pub fn collect_ratings(
    opts: &ScrapeOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Collected> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&opts.user_id);
    }

    let mut records: Vec<RatingRecord> = Vec::new();
    let mut page = FIRST_PAGE;

    let stop = loop {
        let url = opts.page_url(page);
        logd!(page, %url, "requesting page");
        let fetched = source.fetch(&url)?;

        if !fetched.is_success() {
            logf!(page, status = fetched.status, "non-success status, stopping");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Page {page}: HTTP {}, stopping", fetched.status));
            }
            break StopReason::HttpStatus { page, status: fetched.status };
        }

        let extract = parse_page(&fetched.body, &opts.extract);
        logf!(page, rows = extract.rows_found, records = extract.records.len(), "page extracted");
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, extract.rows_found);
        }

        if extract.rows_found == 0 {
            break StopReason::EmptyPage { page };
        }

        records.extend(extract.records);
        page += 1;
    };

    let pages = page - FIRST_PAGE;
    logf!(pages, records = records.len(), ?stop, "collection finished");
    if let Some(p) = progress.as_deref_mut() {
        p.finish(pages, records.len());
    }

    Ok(Collected { records, pages, stop })
}
