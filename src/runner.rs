// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, ExportOptions},
    core::net::{HttpSource, PageSource},
    error::{Error, Result},
    file::{resolve_out_path, write_export},
    progress::Progress,
    scrape::{self, StopReason},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub records: usize,
    pub pages: u32,
    pub stop: StopReason,
}

/// Collect all ratings, then write them in one go.
/// An empty collection is an error and no file is written.
pub fn run(
    opts: &AppOptions,
    source: &mut dyn PageSource,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let collected = scrape::collect_ratings(&opts.scrape, source, progress.as_deref_mut())?;

    if collected.records.is_empty() {
        logw!(user_id = %opts.scrape.user_id, stop = ?collected.stop, "no ratings collected");
        return Err(Error::NoRatings { user_id: opts.scrape.user_id.clone() });
    }

    let default_name = ExportOptions::default_filename(
        &crate::core::sanitize::sanitize_filename_part(&opts.scrape.user_id),
    );
    let user_o = opts
        .export
        .out
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let path = resolve_out_path(opts.export.out_dir.as_deref(), &user_o, &default_name)?;

    if let Err(e) = write_export(&path, &collected.records, opts.scrape.extract.extract_watched_date) {
        loge!(path = %path.display(), error = %e, "export failed");
        return Err(e);
    }
    logf!(path = %path.display(), records = collected.records.len(), "export written");

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {} ratings to {}", collected.records.len(), path.display()));
    }

    Ok(RunSummary {
        path,
        records: collected.records.len(),
        pages: collected.pages,
        stop: collected.stop,
    })
}

/// `run` against the live site.
pub fn run_http(opts: &AppOptions, progress: Option<&mut (dyn Progress + '_)>) -> Result<RunSummary> {
    let mut source = HttpSource::new()?;
    run(opts, &mut source, progress)
}
