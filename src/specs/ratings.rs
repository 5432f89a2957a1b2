// src/specs/ratings.rs
//
// userratings.php (list view). Layout, as far as we rely on it:
//
//   <div class="user-ratings-header">Rated on January 5, 2021</div>
//   <div class="row mb-4">
//     <div class="col-2"><div class="fa-user-rat-box">8</div></div>
//     <div class="user-ratings-movie-item">
//       <div class="mc-title"><a>Title</a></div> <span class="mc-year">1979</span>
//       <div class="mc-director"><a>Name</a>, <a>Name</a></div>
//       <div class="credits">Actor, Actor</div>     (or div.mc-cast)
//       <div class="avg mx-0">7.9</div>
//     </div>
//   </div>
//
// A header applies to every row after it until the next header.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::NO_TITLE;
use crate::config::options::{CastSelector, ExtractOptions};
use crate::core::date::parse_rated_on;
use crate::core::html::{element_text, first_text, joined_texts, static_selector};
use crate::record::RatingRecord;

struct Selectors {
    row: Selector,
    date_header: Selector,
    user_col: Selector,
    user_rating: Selector,
    movie_item: Selector,
    title: Selector,
    year: Selector,
    avg_rating: Selector,
    director: Selector,
    name_link: Selector,
    credits: Selector,
    mc_cast: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    row: static_selector("div.row.mb-4"),
    date_header: static_selector("div.user-ratings-header"),
    user_col: static_selector("div.col-2"),
    user_rating: static_selector("div.fa-user-rat-box"),
    movie_item: static_selector("div.user-ratings-movie-item"),
    title: static_selector("div.mc-title"),
    year: static_selector("span.mc-year"),
    avg_rating: static_selector("div.avg.mx-0"),
    director: static_selector("div.mc-director"),
    name_link: static_selector("a"),
    credits: static_selector(CastSelector::Credits.css()),
    mc_cast: static_selector(CastSelector::McCast.css()),
});

impl Selectors {
    fn cast(&self, which: CastSelector) -> &Selector {
        match which {
            CastSelector::Credits => &self.credits,
            CastSelector::McCast => &self.mc_cast,
        }
    }
}

/// Result of one page. `rows_found` counts row containers, including rows
/// that produced no record; the paginator stops on `rows_found == 0`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageExtract {
    pub rows_found: usize,
    pub records: Vec<RatingRecord>,
}

/// Extract every rating on one listing page, in markup order.
pub fn parse_page(html_doc: &str, opts: &ExtractOptions) -> PageExtract {
    let doc = Html::parse_document(html_doc);

    let rows: Vec<(ElementRef<'_>, Option<String>)> = if opts.extract_watched_date {
        rows_with_dates(&doc, opts)
            .into_iter()
            .map(|(row, date)| (row, Some(date)))
            .collect()
    } else {
        doc.select(&SEL.row).map(|row| (row, None)).collect()
    };

    let rows_found = rows.len();
    let records: Vec<RatingRecord> = rows
        .into_iter()
        .filter_map(|(row, date)| extract_row(row, date, opts))
        .collect();

    if records.len() < rows_found {
        logd!("{} of {} rows had no movie item", rows_found - records.len(), rows_found);
    }

    PageExtract { rows_found, records }
}

/// Walk the tree in document order; each row takes the date of the last
/// header seen before it ("" when none precedes it).
fn rows_with_dates<'a>(doc: &'a Html, opts: &ExtractOptions) -> Vec<(ElementRef<'a>, String)> {
    let mut current = s!();
    let mut out = Vec::new();

    for node in doc.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };
        if SEL.date_header.matches(&el) {
            current = parse_rated_on(&element_text(el), opts.language);
        } else if SEL.row.matches(&el) {
            out.push((el, current.clone()));
        }
    }
    out
}

/// One row → record. `None` when the row has no movie item.
fn extract_row(
    row: ElementRef<'_>,
    watched_date: Option<String>,
    opts: &ExtractOptions,
) -> Option<RatingRecord> {
    // User's own rating sits beside the movie item, not in it.
    let user_rating = row
        .select(&SEL.user_col)
        .next()
        .and_then(|col| first_text(col, &SEL.user_rating))
        .unwrap_or_default();

    let item = row.select(&SEL.movie_item).next()?;

    let title = first_text(item, &SEL.title)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| s!(NO_TITLE));
    let year = first_text(item, &SEL.year).unwrap_or_default();
    let avg_rating = first_text(item, &SEL.avg_rating).unwrap_or_default();
    let directors = item
        .select(&SEL.director)
        .next()
        .map(|d| joined_texts(d, &SEL.name_link, ", "))
        .unwrap_or_default();
    let actors = first_text(item, SEL.cast(opts.cast_selector)).unwrap_or_default();

    Some(RatingRecord {
        title,
        year,
        user_rating,
        avg_rating,
        watched_date,
        directors,
        actors,
    })
}
