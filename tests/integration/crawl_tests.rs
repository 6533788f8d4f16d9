//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use skweez::config::Config;
use skweez::crawler::crawl;
use skweez::output::{emit, CrawlStatistics, OutputFormat};
use skweez::{FrequencyCache, WordStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given depth
fn create_test_config(depth: u32) -> Config {
    let mut config = Config::default();
    config.crawler.depth = depth;
    config.crawler.max_concurrent_pages = 4;
    config.crawler.request_timeout_secs = 5;
    config
}

/// An HTML page response
///
/// `set_body_string` would force `text/plain`, so the body goes in raw with
/// its own MIME type.
fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><body>{}</body></html>", body).into_bytes(),
        "text/html",
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn run(config: &Config, targets: &[String]) -> (Arc<FrequencyCache>, CrawlStatistics) {
    let store = Arc::new(FrequencyCache::new());
    let stats = crawl(config, targets, store.clone())
        .await
        .expect("Crawl failed");
    (store, stats)
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<p>Welcome visitors</p><a href="/page1">first</a><a href="/page2">second</a>"#,
    )
    .await;
    mount_page(&mock_server, "/page1", "<p>Welcome travellers</p>").await;
    mount_page(&mock_server, "/page2", "<p>Goodbye travellers</p>").await;

    let (store, stats) = run(&create_test_config(2), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.pages_failed, 0);
    assert_eq!(store.count("Welcome"), 2);
    assert_eq!(store.count("travellers"), 2);
    assert_eq!(store.count("visitors"), 1);
    assert_eq!(store.count("Goodbye"), 1);
    // Link text counts as page text
    assert_eq!(store.count("first"), 1);
    assert_eq!(store.count("second"), 1);
}

#[tokio::test]
async fn test_depth_one_fetches_only_seed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<p>Seed content</p><a href="/linked">more</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/linked"))
        .respond_with(html_page("<p>Never fetched</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (store, stats) = run(&create_test_config(1), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.links_depth_exceeded, 1);
    assert_eq!(store.count("Seed"), 1);
    assert_eq!(store.count("Never"), 0);
    // Wiremock verifies expect(0) when the mock server drops
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/level2">next</a>"#).await;
    mount_page(&mock_server, "/level2", r#"<a href="/level3">next</a>"#).await;
    mount_page(&mock_server, "/level3", r#"<a href="/level4">next</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/level4"))
        .respond_with(html_page("<p>too deep</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (_, stats) = run(&create_test_config(3), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.links_depth_exceeded, 1);
}

#[tokio::test]
async fn test_unlimited_depth_follows_whole_chain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for i in 0..6 {
        let page_path = if i == 0 { "/".to_string() } else { format!("/p{}", i) };
        let body = if i < 5 {
            format!(r#"<a href="/p{}">next</a>"#, i + 1)
        } else {
            "<p>bottom reached</p>".to_string()
        };
        mount_page(&mock_server, &page_path, &body).await;
    }

    let (store, stats) = run(&create_test_config(0), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 6);
    assert_eq!(store.count("bottom"), 1);
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r##"<a href="/shared">a</a><a href="/shared#top">b</a><a href="/other">c</a><a href="/">home</a>"##,
    )
    .await;
    mount_page(&mock_server, "/shared", r#"<a href="/other">c</a><a href="/">home</a>"#).await;
    mount_page(&mock_server, "/other", r#"<a href="/shared">a</a>"#).await;

    let (_, stats) = run(&create_test_config(0), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 3);
}

#[tokio::test]
async fn test_script_and_style_excluded() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<style>body { color: purple }</style>
           <script>var secretvalue = computeThings();</script>
           <p>visible paragraph</p>"#,
    )
    .await;

    let mut config = create_test_config(1);
    config.words.min_length = 0;
    let (store, _) = run(&config, &[base_url]).await;

    let expected: BTreeMap<String, u64> = [("paragraph", 1), ("visible", 1)]
        .iter()
        .map(|(w, c)| (w.to_string(), *c))
        .collect();
    assert_eq!(store.snapshot(), expected);
}

#[tokio::test]
async fn test_failed_page_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">broken</a><a href="/missing">missing</a><a href="/fine">fine</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<p>server exploded</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/fine", "<p>still collected</p>").await;

    // /missing has no mock, so wiremock answers 404
    let (store, stats) = run(&create_test_config(2), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.pages_failed, 2);
    assert_eq!(store.count("collected"), 1);
    // Error bodies are not harvested
    assert_eq!(store.count("exploded"), 0);
}

/// Word store that panics when it is asked to count `trigger`
struct TrippedStore {
    inner: FrequencyCache,
    trigger: &'static str,
}

impl WordStore for TrippedStore {
    fn increment(&self, word: &str) {
        if word == self.trigger {
            panic!("refusing to count {}", word);
        }
        self.inner.increment(word);
    }

    fn count(&self, word: &str) -> u64 {
        self.inner.count(word)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn words(&self) -> Vec<String> {
        self.inner.words()
    }

    fn snapshot(&self) -> BTreeMap<String, u64> {
        self.inner.snapshot()
    }
}

#[tokio::test]
async fn test_panicking_page_task_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<p>seed words</p><a href="/tripwire">one</a><a href="/fine">two</a>"#,
    )
    .await;
    mount_page(&mock_server, "/tripwire", "<p>detonate</p>").await;
    mount_page(&mock_server, "/fine", "<p>survivor</p>").await;

    let store = Arc::new(TrippedStore {
        inner: FrequencyCache::new(),
        trigger: "detonate",
    });
    let stats = crawl(&create_test_config(2), &[base_url], store.clone())
        .await
        .expect("Crawl failed");

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(store.count("seed"), 1);
    assert_eq!(store.count("survivor"), 1);
    assert_eq!(store.count("detonate"), 0);
}

#[tokio::test]
async fn test_unreachable_seed_is_not_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_page(&mock_server, "/", "<p>reachable content</p>").await;

    // Nothing listens on port 9 of localhost
    let targets = vec!["http://127.0.0.1:9/".to_string(), base_url];
    let mut config = create_test_config(1);
    config.scope.domains = vec!["*".to_string()];

    let (store, stats) = run(&config, &targets).await;

    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(store.count("reachable"), 1);
}

#[tokio::test]
async fn test_out_of_scope_links_not_fetched() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        &format!(r#"<a href="{}/elsewhere">away</a>"#, other_server.uri()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(html_page("<p>foreign words</p>"))
        .expect(0)
        .mount(&other_server)
        .await;

    let (store, stats) = run(&create_test_config(3), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.links_out_of_scope, 1);
    assert_eq!(store.count("foreign"), 0);
}

#[tokio::test]
async fn test_scope_entry_allows_second_server() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        &format!(r#"<a href="{}/elsewhere">away</a>"#, other_server.uri()),
    )
    .await;
    mount_page(&other_server, "/elsewhere", "<p>foreign words</p>").await;

    let mut config = create_test_config(2);
    config.scope.domains = vec![other_server.uri()];

    let (store, stats) = run(&config, &[base_url]).await;

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(store.count("foreign"), 1);
}

#[tokio::test]
async fn test_url_filter_replaces_domain_scope() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/docs/intro">docs</a><a href="/blog/post">blog</a>"#,
    )
    .await;
    mount_page(&mock_server, "/docs/intro", "<p>documentation words</p>").await;

    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .respond_with(html_page("<p>blogging words</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(2);
    // The seed itself must match the filter as well
    config.scope.url_filter = Some(r"/$|/docs/".to_string());

    let (store, stats) = run(&config, &[base_url]).await;

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(store.count("documentation"), 1);
    assert_eq!(store.count("blogging"), 0);
}

#[tokio::test]
async fn test_invalid_url_filter_is_an_error() {
    let mut config = create_test_config(1);
    config.scope.url_filter = Some("(unclosed".to_string());

    let store = Arc::new(FrequencyCache::new());
    let result = crawl(&config, &["example.com".to_string()], store).await;

    assert!(matches!(result, Err(skweez::SkweezError::Config(_))));
}

#[tokio::test]
async fn test_links_only_followed_from_html() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/notes.txt">notes</a>"#).await;

    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"plain words <a href="/hidden">hidden</a>"#, "text/plain"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(html_page("<p>hidden</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (store, stats) = run(&create_test_config(0), &[base_url]).await;

    assert_eq!(stats.pages_fetched, 2);
    // Words are still harvested from non-HTML bodies
    assert_eq!(store.count("plain"), 1);
    assert_eq!(store.count("words"), 1);
}

#[tokio::test]
async fn test_no_filter_keeps_short_words() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "<p>a ab (abc) über!</p>").await;

    let mut config = create_test_config(1);
    config.words.filter = false;
    let (store, _) = run(&config, &[base_url]).await;

    assert_eq!(store.words(), vec!["a", "ab", "abc", "über"]);
}

#[tokio::test]
async fn test_json_output_to_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "<h1>The Quick, Brown-Fox jumps!</h1><p>jumps again</p>",
    )
    .await;

    let (store, _) = run(&create_test_config(1), &[base_url]).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("words.json");
    emit(store.as_ref(), OutputFormat::Json, Some(&output_path)).expect("Failed to write output");

    let written = std::fs::read_to_string(&output_path).expect("Failed to read output");
    let parsed: BTreeMap<String, u64> = serde_json::from_str(&written).expect("Invalid JSON");

    let expected: BTreeMap<String, u64> = [("Brown-Fox", 1), ("Quick", 1), ("again", 1), ("jumps", 2)]
        .iter()
        .map(|(w, c)| (w.to_string(), *c))
        .collect();
    assert_eq!(parsed, expected);
}

#[tokio::test]
async fn test_plain_output_to_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "<p>zebra apple mango apple</p>").await;

    let (store, _) = run(&create_test_config(1), &[base_url]).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("words.txt");
    emit(store.as_ref(), OutputFormat::Plain, Some(&output_path)).expect("Failed to write output");

    let written = std::fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(written, "apple\nmango\nzebra\n");
}
