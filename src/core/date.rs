// src/core/date.rs
//
// "Rated on …" header text → ISO date. Pure: the language is passed in, never
// read from process locale.

use chrono::NaiveDate;

use crate::config::options::Language;

const EN_PREFIX: &str = "Rated on";
const ES_PREFIX: &str = "Votada el";

const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Header text → `YYYY-MM-DD`.
/// - No "rated on" phrase at all → empty string.
/// - Phrase present but the date does not parse → trailing text verbatim.
pub fn parse_rated_on(text: &str, lang: Language) -> String {
    let Some(raw) = date_part(text, lang) else { return s!() };
    match parse_date(raw, lang) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => {
            logd!("unparsed watched date {raw:?}, keeping raw text");
            s!(raw)
        }
    }
}

/// Text after the language's "rated on" phrase, trimmed.
fn date_part(text: &str, lang: Language) -> Option<&str> {
    let prefix = match lang { Language::En => EN_PREFIX, Language::Es => ES_PREFIX };
    let idx = text.find(prefix)?;
    let mut rest = text[idx + prefix.len()..].trim_start();
    if lang == Language::Es {
        // "Votada el día: 5 de enero de 2021"
        rest = rest
            .strip_prefix("día:")
            .or_else(|| rest.strip_prefix("dia:"))
            .unwrap_or(rest)
            .trim_start();
    }
    let rest = rest.trim();
    if rest.is_empty() { None } else { Some(rest) }
}

pub fn parse_date(s: &str, lang: Language) -> Option<NaiveDate> {
    match lang {
        Language::En => NaiveDate::parse_from_str(s.trim(), "%B %d, %Y").ok(),
        Language::Es => parse_es(s),
    }
}

/// "5 de enero de 2021"
fn parse_es(s: &str) -> Option<NaiveDate> {
    let lc = s.trim().to_lowercase();
    let mut parts = lc.split(" de ").map(str::trim);
    let day: u32 = parts.next()?.parse().ok()?;
    let month_name = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() { return None; }
    let month = ES_MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_header_to_iso() {
        assert_eq!(parse_rated_on("Rated on January 5, 2021", Language::En), "2021-01-05");
        assert_eq!(parse_rated_on("  Rated on December 31, 1999  ", Language::En), "1999-12-31");
    }

    #[test]
    fn unparseable_keeps_raw_tail() {
        assert_eq!(parse_rated_on("Rated on Unknown", Language::En), "Unknown");
        assert_eq!(parse_rated_on("Rated on February 30, 2021", Language::En), "February 30, 2021");
    }

    #[test]
    fn no_phrase_is_empty() {
        assert_eq!(parse_rated_on("Something else", Language::En), "");
        assert_eq!(parse_rated_on("Rated on   ", Language::En), "");
    }

    #[test]
    fn spanish_header_to_iso() {
        assert_eq!(parse_rated_on("Votada el día: 5 de enero de 2021", Language::Es), "2021-01-05");
        assert_eq!(parse_rated_on("Votada el 17 de Septiembre de 2019", Language::Es), "2019-09-17");
    }

    #[test]
    fn spanish_unknown_month_keeps_raw() {
        assert_eq!(parse_rated_on("Votada el día: 5 de brumario de 2021", Language::Es), "5 de brumario de 2021");
    }

    #[test]
    fn language_is_not_global() {
        // Same text, different language: English phrase is not recognised in Spanish mode.
        assert_eq!(parse_rated_on("Rated on January 5, 2021", Language::Es), "");
        assert_eq!(parse_rated_on("Rated on January 5, 2021", Language::En), "2021-01-05");
    }
}
