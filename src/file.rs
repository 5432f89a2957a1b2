// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::record::RatingRecord;

/// Write the export file, creating parent directories as needed.
pub fn write_export(path: &Path, records: &[RatingRecord], include_watched_date: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    crate::csv::write_records(BufWriter::new(file), records, include_watched_date)
}

/// Work out the output file.
/// - empty `user_o` → `default_filename`
/// - `user_o` ending in a separator, or naming an existing dir → that dir + `default_filename`
/// - otherwise `user_o` as given
///
/// A relative result is placed under `out_dir` when one is given.
pub fn resolve_out_path(out_dir: Option<&Path>, user_o: &str, default_filename: &str) -> Result<PathBuf> {
    let user_o = user_o.trim();
    let p = if user_o.is_empty() {
        PathBuf::from(default_filename)
    } else {
        PathBuf::from(normalize_separators(user_o))
    };
    let p = match out_dir {
        Some(dir) if p.is_relative() => dir.join(p),
        _ => p,
    };

    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

/// On Windows, `/` becomes `\\`. Elsewhere `\\` is an ordinary filename byte and is kept.
pub fn normalize_separators(p: &str) -> String {
    if cfg!(windows) { p.replace('/', "\\") } else { s!(p) }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
