// src/core/html.rs
//
// Small helpers over `scraper` element refs. Text is always whitespace-normalized.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Parse a selector known at compile time. Only used for literal CSS.
pub fn static_selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid static selector {css:?}: {e}"))
}

/// All descendant text, whitespace collapsed.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first descendant matching `sel`, if any.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

/// Text of every descendant matching `sel`, empty entries dropped, joined by `sep`.
pub fn joined_texts(scope: ElementRef<'_>, sel: &Selector, sep: &str) -> String {
    scope
        .select(sel)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(doc: &Html) -> ElementRef<'_> {
        doc.root_element()
    }

    #[test]
    fn element_text_collapses_whitespace_and_entities() {
        let doc = Html::parse_fragment("<div> The&nbsp;Thing\n  <span>(1982)</span> </div>");
        let div = static_selector("div");
        assert_eq!(first_text(root(&doc), &div).as_deref(), Some("The Thing (1982)"));
    }

    #[test]
    fn first_text_missing_is_none() {
        let doc = Html::parse_fragment("<p>x</p>");
        assert_eq!(first_text(root(&doc), &static_selector("div.nope")), None);
    }

    #[test]
    fn joined_texts_skips_empty() {
        let doc = Html::parse_fragment(r#"<div><a>Ridley Scott</a><a> </a><a>Tony Scott</a></div>"#);
        assert_eq!(joined_texts(root(&doc), &static_selector("a"), ", "), "Ridley Scott, Tony Scott");
    }

    #[test]
    #[should_panic(expected = "invalid static selector")]
    fn static_selector_rejects_garbage() {
        let _ = static_selector("div[");
    }
}
