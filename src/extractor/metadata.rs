use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::text::{HIDDEN_ELEMENTS, normalize_whitespace, visible_text};

pub const UNTITLED: &str = "Untitled Article";

/// One place a metadata value may live in a document.
enum Probe {
    /// `content` attribute of a `<meta>` tag.
    Content(Selector),
    /// Text of the first matching element that has any.
    Text(Selector),
    /// Named attribute of the first matching element that has it.
    Attr(Selector, &'static str),
}

impl Probe {
    fn content(css: &str) -> Self {
        Self::Content(parse(css))
    }

    fn text(css: &str) -> Self {
        Self::Text(parse(css))
    }

    fn attr(css: &str, name: &'static str) -> Self {
        Self::Attr(parse(css), name)
    }

    fn resolve(&self, document: &Html) -> Option<String> {
        match self {
            Self::Content(selector) => non_empty_attr(document, selector, "content"),
            Self::Attr(selector, name) => non_empty_attr(document, selector, name),
            Self::Text(selector) => document
                .select(selector)
                .map(|element| normalize_whitespace(&visible_text(element, HIDDEN_ELEMENTS)))
                .find(|text| !text.is_empty()),
        }
    }
}

fn non_empty_attr(document: &Html, selector: &Selector, name: &str) -> Option<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr(name))
        .map(normalize_whitespace)
        .find(|value| !value.is_empty())
}

fn parse(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

static TITLE_PROBES: LazyLock<[Probe; 3]> = LazyLock::new(|| {
    [
        Probe::text("title"),
        Probe::text("h1"),
        Probe::content("meta[property='og:title']"),
    ]
});

static AUTHOR_PROBES: LazyLock<[Probe; 4]> = LazyLock::new(|| {
    [
        Probe::content("meta[name='author']"),
        Probe::content("meta[property='article:author']"),
        Probe::text(".author, .byline, .article-author, [data-testid='author']"),
        Probe::text("[rel='author']"),
    ]
});

static DATE_PROBES: LazyLock<[Probe; 4]> = LazyLock::new(|| {
    [
        Probe::content("meta[property='article:published_time']"),
        Probe::content("meta[name='date']"),
        Probe::attr("time[datetime]", "datetime"),
        Probe::text(".date, .publish-date, .article-date, .published, [data-testid='timestamp']"),
    ]
});

fn first_match(document: &Html, probes: &[Probe]) -> Option<String> {
    probes.iter().find_map(|probe| probe.resolve(document))
}

pub fn title(document: &Html) -> String {
    first_match(document, &*TITLE_PROBES).unwrap_or_else(|| UNTITLED.to_string())
}

pub fn author(document: &Html) -> Option<String> {
    first_match(document, &*AUTHOR_PROBES)
}

pub fn publish_date(document: &Html) -> Option<String> {
    first_match(document, &*DATE_PROBES)
}
