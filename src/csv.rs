// src/csv.rs
use std::io::{self, Read, Write};

use crate::error::Result;
use crate::record::RatingRecord;

/* ---------------- Writing ---------------- */

/// Header row, then one row per record. Zero records → header only.
pub fn write_records<W: Write>(w: W, records: &[RatingRecord], include_watched_date: bool) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(w);
    wtr.write_record(RatingRecord::headers(include_watched_date))?;
    for r in records {
        wtr.write_record(r.to_row(include_watched_date))?;
    }
    wtr.flush()?;
    Ok(())
}

/// In-memory export, same bytes as `write_records`.
pub fn to_csv_string(records: &[RatingRecord], include_watched_date: bool) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, include_watched_date)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/* ---------------- Parsing ---------------- */

/// Read an exported file back. Columns are matched by header name.
pub fn read_records<R: Read>(r: R) -> Result<Vec<RatingRecord>> {
    let mut rdr = ::csv::ReaderBuilder::new().has_headers(true).from_reader(r);
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let mut out = Vec::new();
    for rec in rdr.records() {
        let row: Vec<String> = rec?.iter().map(String::from).collect();
        out.push(RatingRecord::from_row(&headers, &row));
    }
    Ok(out)
}
