use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::extractor::text::{
    DOCUMENT_SKIP_ELEMENTS, NON_CONTENT_ELEMENTS, has_ancestor_named, normalize_whitespace,
    visible_text,
};

/// A selector's text must be longer than this (in characters) to be taken
/// as the article body.
pub const MIN_BODY_CHARS: usize = 100;

/// Most specific containers first, bare paragraphs last.
const BODY_SELECTORS: &[&str] = &[
    "article",
    "[role='article']",
    "[data-testid='article-body']",
    ".article-content",
    ".article-body",
    ".story-body",
    ".post-content",
    ".entry-content",
    "main",
    "[role='main']",
    "#content",
    ".content",
    "p",
];

static COMPILED_BODY_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    BODY_SELECTORS
        .iter()
        .map(|css| {
            let selector = Selector::parse(css)
                .unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"));
            (*css, selector)
        })
        .collect()
});

/// Body text of the first selector whose text clears [`MIN_BODY_CHARS`],
/// otherwise all visible text in the document.
pub fn body_text(document: &Html) -> String {
    COMPILED_BODY_SELECTORS
        .iter()
        .find_map(|(css, selector)| {
            let text = selector_text(document, selector);
            let len = text.chars().count();
            (len > MIN_BODY_CHARS).then(|| {
                debug!(selector = *css, chars = len, "Body selector accepted");
                text
            })
        })
        .unwrap_or_else(|| {
            debug!("No body selector cleared the threshold, using whole document");
            normalize_whitespace(&visible_text(document.root_element(), DOCUMENT_SKIP_ELEMENTS))
        })
}

/// Text of every element `selector` matches outside page chrome, joined by
/// single spaces.
fn selector_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .filter(|element| !has_ancestor_named(*element, NON_CONTENT_ELEMENTS))
        .map(|element| normalize_whitespace(&visible_text(element, NON_CONTENT_ELEMENTS)))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_sentence(word: &str) -> String {
        format!("{word} is a sentence that keeps going for long enough to count. ").repeat(3)
    }

    #[test]
    fn test_article_container_wins() {
        let html = format!(
            "<html><body><article><p>{}</p></article><main><p>{}</p></main></body></html>",
            long_sentence("Article"),
            long_sentence("Main")
        );
        let body = body_text(&Html::parse_document(&html));
        assert!(body.starts_with("Article is a sentence"));
        assert!(!body.contains("Main is"));
    }

    #[test]
    fn test_short_container_is_skipped_for_paragraphs() {
        let html = format!(
            "<html><body><article>Too short to count.</article><div><p>{}</p><p>{}</p></div></body></html>",
            long_sentence("First"),
            long_sentence("Second")
        );
        let body = body_text(&Html::parse_document(&html));
        assert!(body.starts_with("First is a sentence"));
        assert!(body.contains("Second is a sentence"));
        assert!(!body.contains("Too short"));
    }

    #[test]
    fn test_all_matches_of_a_selector_are_joined() {
        let html = "<html><body><div class='post-content'>Part one of the story runs here,</div><div class='post-content'>and part two finishes it off with enough extra words to clear the minimum length bar.</div></body></html>";
        let body = body_text(&Html::parse_document(html));
        assert_eq!(
            body,
            "Part one of the story runs here, and part two finishes it off with enough extra words to clear the minimum length bar."
        );
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let exactly = "x".repeat(MIN_BODY_CHARS);
        let html = format!("<html><body><article>{exactly}</article><nav>menu</nav></body></html>");
        // Nothing clears the bar, so the whole document (chrome included) is used.
        let body = body_text(&Html::parse_document(&html));
        assert_eq!(body, format!("{exactly} menu"));
    }

    #[test]
    fn test_chrome_inside_container_is_ignored() {
        let html = format!(
            "<html><body><article><nav>Home | World | Sports</nav><p>{}</p><aside>Related links</aside></article></body></html>",
            long_sentence("Story")
        );
        let body = body_text(&Html::parse_document(&html));
        assert!(!body.contains("Home | World"));
        assert!(!body.contains("Related links"));
    }

    #[test]
    fn test_whole_document_fallback_skips_head_and_scripts() {
        let html = "<html><head><title>Invisible Head Title</title><script>var x = 1;</script></head><body><span>Just   some\n words</span><script>y()</script></body></html>";
        let body = body_text(&Html::parse_document(html));
        assert_eq!(body, "Just some words");
    }

    #[test]
    fn test_paragraphs_in_footer_are_not_body() {
        let html = "<html><body><div><p>This page has no article container, so the bare paragraph selector wins here.</p>\
                    <p>A second paragraph carries the length past the minimum needed.</p></div>\
                    <footer><p>Copyright Metro Daily. All rights reserved. Subscribe now.</p></footer></body></html>";
        let body = body_text(&Html::parse_document(html));
        assert!(body.starts_with("This page has no article container"));
        assert!(body.ends_with("past the minimum needed."));
        assert!(!body.contains("Copyright"));
    }

    #[test]
    fn test_article_cards_in_sidebar_are_not_body() {
        let html = format!(
            "<html><body><aside><article>{}</article></aside><main><p>{}</p></main></body></html>",
            long_sentence("Promo"),
            long_sentence("Story")
        );
        let body = body_text(&Html::parse_document(&html));
        assert!(body.starts_with("Story is a sentence"));
        assert!(!body.contains("Promo"));
    }
}
