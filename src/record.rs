// src/record.rs
//
// One exported row. Field order here is the CSV column order.

pub const HEADERS: [&str; 7] = [
    "Title", "Year", "UserRating", "AvgRating", "WatchedDate", "Directors", "Actors",
];
const WATCHED_DATE_COL: usize = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingRecord {
    pub title: String,
    pub year: String,
    pub user_rating: String,
    pub avg_rating: String,
    /// `None` when the extractor runs without date headers; the column is then omitted.
    pub watched_date: Option<String>,
    pub directors: String,
    pub actors: String,
}

impl RatingRecord {
    pub fn headers(include_watched_date: bool) -> Vec<&'static str> {
        HEADERS
            .iter()
            .enumerate()
            .filter(|(i, _)| include_watched_date || *i != WATCHED_DATE_COL)
            .map(|(_, h)| *h)
            .collect()
    }

    pub fn to_row(&self, include_watched_date: bool) -> Vec<&str> {
        let mut row = vec![
            self.title.as_str(),
            self.year.as_str(),
            self.user_rating.as_str(),
            self.avg_rating.as_str(),
        ];
        if include_watched_date {
            row.push(self.watched_date.as_deref().unwrap_or(""));
        }
        row.push(self.directors.as_str());
        row.push(self.actors.as_str());
        row
    }

    /// Rebuild from a CSV row, matching cells by header name. Unknown columns are ignored.
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let mut rec = RatingRecord::default();
        for (h, cell) in headers.iter().zip(row) {
            let cell = cell.clone();
            match h.as_str() {
                "Title" => rec.title = cell,
                "Year" => rec.year = cell,
                "UserRating" => rec.user_rating = cell,
                "AvgRating" => rec.avg_rating = cell,
                "WatchedDate" => rec.watched_date = Some(cell),
                "Directors" => rec.directors = cell,
                "Actors" => rec.actors = cell,
                _ => {}
            }
        }
        rec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RatingRecord {
        RatingRecord {
            title: s!("Alien"),
            year: s!("1979"),
            user_rating: s!("9"),
            avg_rating: s!("7.9"),
            watched_date: Some(s!("2021-01-05")),
            directors: s!("Ridley Scott"),
            actors: s!("Sigourney Weaver, Tom Skerritt"),
        }
    }

    #[test]
    fn headers_with_and_without_date() {
        assert_eq!(RatingRecord::headers(true), HEADERS.to_vec());
        assert_eq!(
            RatingRecord::headers(false),
            vec!["Title", "Year", "UserRating", "AvgRating", "Directors", "Actors"]
        );
    }

    #[test]
    fn row_lines_up_with_headers() {
        let r = sample();
        let row = r.to_row(true);
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(row[4], "2021-01-05");
        let row = r.to_row(false);
        assert_eq!(row, vec!["Alien", "1979", "9", "7.9", "Ridley Scott", "Sigourney Weaver, Tom Skerritt"]);
    }

    #[test]
    fn missing_date_is_blank_cell() {
        let r = RatingRecord { watched_date: None, ..sample() };
        assert_eq!(r.to_row(true)[4], "");
    }

    #[test]
    fn from_row_matches_by_name() {
        let headers: Vec<String> = vec![s!("Year"), s!("Title"), s!("Extra")];
        let row: Vec<String> = vec![s!("1982"), s!("The Thing"), s!("x")];
        let r = RatingRecord::from_row(&headers, &row);
        assert_eq!(r.title, "The Thing");
        assert_eq!(r.year, "1982");
        assert_eq!(r.watched_date, None);
    }
}
