use std::time::Duration;

use skeptic::fetcher::{FetchError, FetchedPage, HttpFetcher, PageFetcher};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn html(status: u16, body: impl Into<Vec<u8>>, content_type: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_bytes(body)
        .insert_header("Content-Type", content_type)
}

/// Serve `template` at `route` and fetch it with a 5 second budget.
async fn fetch_served(route: &str, template: ResponseTemplate) -> Result<FetchedPage, FetchError> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    fetcher.fetch(&format!("{}{route}", server.uri())).await
}

#[tokio::test]
async fn test_fetch_sends_crawler_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/story"))
        .and(header("user-agent", "SkepticBot/0.1 (+https://skeptic.example.com)"))
        .respond_with(html(
            200,
            "<html><head><title>Story</title></head><body>Hello World</body></html>",
            "text/html; charset=utf-8",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/story", server.uri());
    let page = HttpFetcher::new(Duration::from_secs(5))
        .unwrap()
        .fetch(&url)
        .await
        .unwrap();

    assert!(page.status.is_success());
    assert!(page.html.contains("Hello World"));
    assert_eq!(page.encoding, "UTF-8");
    assert_eq!(page.url_final.as_str(), url);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    for code in [404u16, 410, 503] {
        match fetch_served("/gone", ResponseTemplate::new(code)).await {
            Err(FetchError::Http(status)) => assert_eq!(status.as_u16(), code),
            other => panic!("expected http error for {code}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_follows_redirects_and_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/2024/long-slug"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2024/long-slug"))
        .respond_with(html(200, "<html><body>Final page</body></html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let page = fetcher.fetch(&format!("{}/short", server.uri())).await.unwrap();

    assert!(page.html.contains("Final page"));
    assert!(page.url_final.as_str().ends_with("/2024/long-slug"));
}

#[tokio::test]
async fn test_redirect_loop() {
    let result = fetch_served(
        "/loop",
        ResponseTemplate::new(302).insert_header("location", "/loop"),
    )
    .await;

    assert!(matches!(result, Err(FetchError::RedirectLoop)));
}

#[tokio::test]
async fn test_gzip_body_is_decompressed() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(b"<html><body><p>This content is gzipped!</p></body></html>")
        .unwrap();
    let compressed = encoder.finish().unwrap();

    let page = fetch_served(
        "/gzipped",
        html(200, compressed, "text/html; charset=utf-8").insert_header("Content-Encoding", "gzip"),
    )
    .await
    .unwrap();

    assert!(page.html.contains("This content is gzipped!"));
}

#[tokio::test]
async fn test_declared_charset_is_honored() {
    // "café" in ISO-8859-1
    let page = fetch_served(
        "/latin1",
        html(
            200,
            b"<html><body><p>caf\xe9</p></body></html>".to_vec(),
            "text/html; charset=iso-8859-1",
        ),
    )
    .await
    .unwrap();

    assert!(page.html.contains("café"));
    assert_eq!(page.encoding, "windows-1252");
}

#[tokio::test]
async fn test_non_html_content_is_rejected() {
    match fetch_served("/photo.jpg", html(200, vec![0xFF, 0xD8, 0xFF], "image/jpeg")).await {
        Err(FetchError::UnsupportedContentType(content_type)) => {
            assert_eq!(content_type, "image/jpeg");
        }
        other => panic!("expected unsupported content type, got {other:?}"),
    }
}

#[tokio::test]
async fn test_oversized_page_is_rejected() {
    let six_mib = 6 * 1024 * 1024;
    match fetch_served("/huge", html(200, vec![b'x'; six_mib], "text/html")).await {
        Err(FetchError::BodyTooLarge(size)) => assert_eq!(size, six_mib as u64),
        other => panic!("expected body too large, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html(200, "<html><body>late</body></html>", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();
    let err = fetcher
        .fetch(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn test_malformed_and_non_web_urls() {
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();

    assert!(matches!(
        fetcher.fetch("not-a-valid-url").await,
        Err(FetchError::InvalidUrl(_))
    ));
    match fetcher.fetch("ftp://example.com/article").await {
        Err(FetchError::UnsupportedScheme(scheme)) => assert_eq!(scheme, "ftp"),
        other => panic!("expected unsupported scheme, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host() {
    // Nothing listens on the discard port locally
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();

    assert!(matches!(err, FetchError::Connect(_) | FetchError::ConnectTimeout));
}
