use std::fs;

use crate::extractor::{ExtractionError, extract, metadata::UNTITLED};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_news_article() {
    let html = fixture("article.html");
    let article = extract(&html, "https://metro.example.com/2024/05/transit").unwrap();

    assert_eq!(article.title, "City Council Approves New Transit Budget");
    // meta author outranks the in-body byline
    assert_eq!(article.author.as_deref(), Some("Dana Whitfield"));
    assert_eq!(article.publish_date.as_deref(), Some("2024-05-14T09:30:00Z"));
    assert_eq!(article.domain.as_deref(), Some("metro.example.com"));
    assert_eq!(article.source_url, "https://metro.example.com/2024/05/transit");

    assert!(article.body_text.starts_with("City Council Approves New Transit Budget"));
    assert!(article.body_text.contains("voted 7 to 2"));
    assert!(article.body_text.contains("said council member Ruth Alvarez."));
    assert!(!article.body_text.contains("Related: Parking"));
    assert!(!article.body_text.contains("Sports"));
    assert!(!article.body_text.contains("window.analytics"));
    assert!(!article.body_text.contains("  "));
    assert!(article.word_count > 50);
    assert_eq!(article.reading_time_minutes, 1);
}

#[test]
fn test_extract_blog_post() {
    let html = fixture("blog.html");
    let article = extract(&html, "https://blog.example.com/sourdough").unwrap();

    assert_eq!(article.title, "Ten Things Nobody Tells You About Sourdough");
    assert_eq!(article.author.as_deref(), Some("Pat Baker"));
    assert_eq!(article.publish_date.as_deref(), Some("2023-11-02"));
    assert!(article.body_text.starts_with("Starter care A healthy starter"));
    assert!(!article.body_text.contains("Subscribe"));
}

#[test]
fn test_paragraph_selector_used_when_containers_are_short() {
    let html = fixture("paragraphs.html");
    let article = extract(&html, "https://example.com/plain").unwrap();

    assert_eq!(
        article.body_text,
        "This page has no article container and its main element is nearly empty. \
         Only the bare paragraphs together carry enough text to pass the length bar."
    );
    assert!(!article.body_text.contains("Short"));
}

#[test]
fn test_unstructured_page_falls_back_to_document_text() {
    let html = fixture("bare.html");
    let article = extract(&html, "https://example.com/bare").unwrap();

    assert_eq!(article.title, UNTITLED);
    assert_eq!(article.author, None);
    assert_eq!(article.publish_date, None);
    assert_eq!(
        article.body_text,
        "Just a few loose words and no paragraphs at all."
    );
}

#[test]
fn test_head_title_stays_out_of_fallback_body() {
    let html = "<html><head><title>Invisible Head Title</title></head>\
                <body><span>Only some loose words here</span></body></html>";
    let article = extract(html, "https://example.com/loose").unwrap();

    assert_eq!(article.title, "Invisible Head Title");
    assert_eq!(article.body_text, "Only some loose words here");
    assert_eq!(article.word_count, 5);
}

#[test]
fn test_footer_paragraphs_stay_out_of_body() {
    let html = "<html><body><div>\
                <p>The county opened a new library branch on Saturday after two years of building work.</p>\
                <p>Residents lined up before the doors opened.</p></div>\
                <footer><p>Copyright Metro Daily. All rights reserved. Subscribe now.</p></footer>\
                </body></html>";
    let article = extract(html, "https://example.com/library").unwrap();

    assert!(article.body_text.ends_with("before the doors opened."));
    assert!(!article.body_text.contains("Subscribe"));
}

#[test]
fn test_empty_document_is_an_error() {
    assert_eq!(
        extract("", "https://example.com").unwrap_err(),
        ExtractionError::EmptyDocument
    );
    assert_eq!(
        extract("  \n\t", "https://example.com").unwrap_err(),
        ExtractionError::EmptyDocument
    );
}

#[test]
fn test_missing_source_url_is_an_error() {
    assert_eq!(
        extract("<p>hi</p>", "").unwrap_err(),
        ExtractionError::MissingSourceUrl
    );
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let article = extract(html, "https://example.com/broken").unwrap();

    assert_eq!(article.title, "Broken");
    assert!(article.body_text.contains("Unclosed tags"));
    assert!(article.body_text.contains("More content"));
}

mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*", path in "[a-z/]*") {
            let url = format!("https://example.com/{path}");
            let _ = extract(&html, &url);
        }

        #[test]
        fn test_body_text_has_no_whitespace_runs(html in ".*") {
            if let Ok(article) = extract(&html, "https://example.com") {
                prop_assert!(!article.body_text.contains("  "));
                prop_assert_eq!(article.body_text.trim(), article.body_text.as_str());
            }
        }
    }
}
