//! Detail-page extraction.
//!
//! Pure transformation of rendered HTML into supplementary fields; no
//! network or storage access. Each service has one fixed selector set.
//! A service without one yields no enrichment rather than an error.

use scraper::{Html, Selector};

use crate::domain::Service;

/// Supplementary fields scraped from a rendered detail page. `summary`
/// and `backdrop_img` are absent when their selectors matched nothing,
/// so the merge step can distinguish "no text on the page" from an
/// intentional empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailData {
    pub genre: Vec<String>,
    pub summary: Option<String>,
    pub backdrop_img: Option<String>,
}

struct SelectorSet {
    /// Container whose `a` descendants hold the `#tag` list.
    genre: &'static str,
    /// Container whose `p` descendants hold the summary text.
    summary: &'static str,
    /// `img` whose `src` is the backdrop, where the service exposes one.
    backdrop: Option<&'static str>,
}

fn selectors_for(service: Service) -> Option<SelectorSet> {
    match service {
        Service::Naver => Some(SelectorSet {
            genre: "#content > div > div > div > div > div a",
            summary: "#content > div > div > div p",
            backdrop: None,
        }),
        Service::Kakao => Some(SelectorSet {
            genre: "#root > main > div > div > div > div > div > div > div:nth-child(3) > div a",
            summary: "#root > main > div > div > div > div > div > div > div:nth-child(2) > div p",
            backdrop: Some("#root > main > div > div > picture img"),
        }),
    }
}

/// Extract genre tags, summary and (for kakao) a backdrop image URL from
/// a rendered detail page. Returns `None` when no selector set is known
/// for the service.
pub fn detail(html: &str, service: Service) -> Option<DetailData> {
    let rules = selectors_for(service)?;
    let doc = Html::parse_document(html);

    let genre = split_tags(&collect_text(&doc, rules.genre));

    let summary_text = collect_text(&doc, rules.summary);
    let summary = (!summary_text.is_empty()).then_some(summary_text);

    let backdrop_img = rules
        .backdrop
        .and_then(|selector| first_attr(&doc, selector, "src"));

    Some(DetailData {
        genre,
        summary,
        backdrop_img,
    })
}

/// Concatenated text of every element matching `selector`, in document
/// order. Mirrors how the tag anchors render as one `#a#b#c` string.
fn collect_text(doc: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .flat_map(|element| element.text())
        .collect()
}

fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Split a `#`-delimited tag string into tags. The delimiter precedes
/// every real tag, so the first segment is always non-tag boilerplate
/// and is dropped.
fn split_tags(text: &str) -> Vec<String> {
    text.split('#').skip(1).map(str::to_string).collect()
}
