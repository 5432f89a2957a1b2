// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fa_scrape::config::options::ExtractOptions;
use fa_scrape::specs::ratings::parse_page;

/// A listing page shaped like the real one: date headers, 20 rows each.
fn synthetic_page(groups: usize) -> String {
    let mut body = String::new();
    for g in 0..groups {
        body.push_str(&format!(
            r#"<div class="user-ratings-header">Rated on January {}, 2021</div>"#,
            g % 28 + 1
        ));
        for i in 0..20 {
            body.push_str(&format!(
                r#"<div class="row mb-4">
                     <div class="col-2"><div class="fa-user-rat-box">{r}</div></div>
                     <div class="col-10"><div class="user-ratings-movie-item">
                       <div class="mc-title"><a href="/en/film{g}{i}.html">Film {g}-{i}</a></div>
                       <span class="mc-year">19{i:02}</span>
                       <div class="mc-director"><a>Director {i}</a>, <a>Co Director</a></div>
                       <div class="credits"><a>Actor A</a>, <a>Actor B</a>, <a>Actor C</a></div>
                       <div class="avg mx-0">6.{r}</div>
                     </div></div>
                   </div>"#,
                r = i % 10,
            ));
        }
    }
    format!("<html><body><div class=\"user-ratings\">{body}</div></body></html>")
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(5);
    let with_dates = ExtractOptions::default();
    let without_dates = ExtractOptions { extract_watched_date: false, ..ExtractOptions::default() };

    c.bench_function("ratings_page_with_dates", |b| {
        b.iter(|| {
            let out = parse_page(black_box(&doc), &with_dates);
            black_box(out.records.len())
        })
    });

    c.bench_function("ratings_page_no_dates", |b| {
        b.iter(|| {
            let out = parse_page(black_box(&doc), &without_dates);
            black_box(out.records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
