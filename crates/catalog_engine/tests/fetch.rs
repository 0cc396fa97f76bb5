use std::time::Duration;

use catalog_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"{"products":[{"id":1,"title":"Apple","price":1.5,"category":"Fruit"},{"id":2,"title":"Bread","price":2.25,"category":"Bakery"}],"total":2}"#;

async fn server_with(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetcher_returns_decoded_listing() {
    catalog_logging::initialize_for_tests();
    let server = server_with(
        "/products",
        ResponseTemplate::new(200).set_body_raw(LISTING, "application/json; charset=utf-8"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/products", server.uri());

    let listing = fetcher.fetch_listing(&url).await.expect("fetch ok");
    assert_eq!(listing.products.len(), 2);
    assert_eq!(listing.products[1].title, "Bread");
    assert_eq!(listing.skipped, 0);
    assert_eq!(listing.metadata.url, url);
    assert_eq!(listing.metadata.final_url, url);
    assert_eq!(listing.metadata.status, 200);
    assert_eq!(listing.metadata.byte_len, LISTING.len() as u64);
    assert!(listing
        .metadata
        .content_type
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn fetcher_accepts_body_without_content_type() {
    let server = server_with(
        "/products",
        ResponseTemplate::new(200).set_body_bytes(LISTING.as_bytes()),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/products", server.uri());

    let listing = fetcher.fetch_listing(&url).await.expect("fetch ok");
    assert_eq!(listing.products.len(), 2);
    assert_eq!(listing.products[0].title, "Apple");
    assert_eq!(listing.metadata.content_type, None);
}

#[tokio::test]
async fn fetcher_fails_on_http_500_with_readable_message() {
    let server = server_with("/products", ResponseTemplate::new(500)).await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/products", server.uri());

    let err = fetcher.fetch_listing(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "request failed with status 500 Internal Server Error");
    assert_eq!(err.to_string(), err.message);
}

#[tokio::test]
async fn fetcher_fails_on_missing_products_field() {
    let server = server_with(
        "/products",
        ResponseTemplate::new(200).set_body_raw(r#"{"items":[]}"#, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch_listing(&format!("{}/products", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Parse);
    assert_eq!(err.message, "response body has no `products` array");
}

#[tokio::test]
async fn fetcher_rejects_non_json_content_type() {
    let server = server_with(
        "/products",
        ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch_listing(&format!("{}/products", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = server_with(
        "/slow",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw(LISTING, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher
        .fetch_listing(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = server_with(
        "/large",
        ResponseTemplate::new(200).set_body_raw(LISTING, "application/json"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher
        .fetch_listing(&format!("{}/large", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(LISTING.len() as u64)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch_listing("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_reports_network_error_when_nothing_listens() {
    // Bind and release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = fetcher
        .fetch_listing(&format!("http://127.0.0.1:{port}/products"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
