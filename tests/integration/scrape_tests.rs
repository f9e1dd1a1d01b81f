use crate::{create_scraper_with, create_test_scraper, html_response, TEST_USER_AGENT};
use glean::{is_url_reachable, GleanError, ScrapedData};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE_PAGE: &str = r#"
<html>
<head>
    <title>  Example  </title>
    <meta name="description" content="An example page">
</head>
<body>
    <h1>  </h1>
    <h2>Real</h2>
    <article>
        <h2 class="headline">Markets rally after report</h2>
        <h3>Short one</h3>
    </article>
    <a href="/a">A</a>
    <a href="/b">B</a>
</body>
</html>
"#;

#[tokio::test]
async fn test_scrape_url_extracts_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(html_response(ARTICLE_PAGE))
        .mount(&mock_server)
        .await;

    let scraper = create_test_scraper();
    let data = scraper
        .scrape_url(&format!("{}/article", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert_eq!(
        data,
        ScrapedData {
            title: "Example".to_string(),
            description: "An example page".to_string(),
            links: vec!["/a".to_string(), "/b".to_string()],
            headings: vec![
                "Real".to_string(),
                "Markets rally after report".to_string(),
                "Short one".to_string(),
            ],
        }
    );
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    // Requests without the expected header fall through to wiremock's 404
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(html_response("<title>ok</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = create_test_scraper();
    let data = scraper
        .scrape_url(&format!("{}/", mock_server.uri()))
        .await
        .expect("Scrape failed");

    assert_eq!(data.title, "ok");
}

#[tokio::test]
async fn test_missing_description_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response("<html><head><title>T</title></head></html>"))
        .mount(&mock_server)
        .await;

    let data = create_test_scraper()
        .scrape_url(&mock_server.uri())
        .await
        .expect("Scrape failed");

    assert_eq!(data.description, "");
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = create_test_scraper()
        .scrape_url(&format!("{}/gone", mock_server.uri()))
        .await;

    match result {
        Err(e @ GleanError::HttpStatus { .. }) => assert_eq!(e.status(), Some(404)),
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_only_exact_200_counts_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/created"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<title>Created</title>"))
        .mount(&mock_server)
        .await;

    let result = create_test_scraper()
        .scrape_url(&format!("{}/created", mock_server.uri()))
        .await;

    assert!(matches!(
        result,
        Err(GleanError::HttpStatus { status: 201, .. })
    ));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/new", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_response("<title>Moved here</title>"))
        .mount(&mock_server)
        .await;

    let data = create_test_scraper()
        .scrape_url(&format!("{}/old", base_url))
        .await
        .expect("Scrape failed");

    assert_eq!(data.title, "Moved here");
}

#[tokio::test]
async fn test_request_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response("<title>slow</title>").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let scraper = create_scraper_with(Duration::ZERO, Duration::from_millis(300));
    let result = scraper.scrape_url(&mock_server.uri()).await;

    match result {
        Err(GleanError::Transport { source, .. }) => assert!(source.is_timeout()),
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delay_precedes_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response("<title>t</title>"))
        .mount(&mock_server)
        .await;

    let scraper = create_scraper_with(Duration::from_millis(300), Duration::from_secs(5));
    let start = std::time::Instant::now();
    scraper
        .scrape_url(&mock_server.uri())
        .await
        .expect("Scrape failed");

    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_headline_scraper_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(html_response(ARTICLE_PAGE))
        .mount(&mock_server)
        .await;

    let headlines = create_test_scraper()
        .scrape_headlines(&format!("{}/news", mock_server.uri()))
        .await
        .expect("Headline scrape failed");

    // "Real" and "Short one" are too short; the article headline matches
    // "h2", the headline class and "article h2"
    assert_eq!(
        headlines,
        vec![
            "Markets rally after report",
            "Markets rally after report",
            "Markets rally after report",
        ]
    );
}

#[tokio::test]
async fn test_headline_scraper_propagates_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = create_test_scraper()
        .scrape_headlines(&mock_server.uri())
        .await;

    assert!(matches!(
        result,
        Err(GleanError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_reachability() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/up"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/up", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;

    let scraper = create_test_scraper();
    assert!(scraper.is_reachable(&format!("{}/up", base_url)).await);
    assert!(scraper.is_reachable(&format!("{}/moved", base_url)).await);
    assert!(!scraper.is_reachable(&format!("{}/broken", base_url)).await);
    assert!(!scraper.is_reachable(&format!("{}/unmocked", base_url)).await);

    let plain_client = reqwest::Client::new();
    assert!(is_url_reachable(&plain_client, &format!("{}/up", base_url)).await);
}

#[tokio::test]
async fn test_emails_from_fetched_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response(
            r#"<p>Write to <a href="mailto:press@example.com">press</a> or help@example.org</p>"#,
        ))
        .mount(&mock_server)
        .await;

    let body = create_test_scraper()
        .fetch_body(&mock_server.uri())
        .await
        .expect("Fetch failed");

    assert_eq!(
        glean::extract_emails(&body),
        vec!["press@example.com", "help@example.org"]
    );
}
