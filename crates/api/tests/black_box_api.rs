use criteria_api::app::{build_app, services::AppServices};
use criteria_core::Record;
use criteria_filter::{PipelineOptions, ZeroPagination};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(catalog: Vec<Record>, options: PipelineOptions) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(AppServices::new(catalog, options));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn catalog() -> Vec<Record> {
    vec![
        Record::new().with("code", 1).with("name", "Mug").with("price", 5),
        Record::new().with("code", 2).with("name", "Lamp").with("price", 15),
        Record::new().with("code", 3).with("name", "Desk").with("price", 25),
    ]
}

async fn get_json(base_url: &str, path_and_query: &str) -> (StatusCode, Value) {
    let res = reqwest::get(format!("{}{}", base_url, path_and_query)).await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

fn codes(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|r| r["code"].as_i64().expect("integer code"))
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let res = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn bare_request_lists_whole_catalog() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (status, body) = get_json(&server.base_url, "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "");
    assert_eq!(codes(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn sort_and_filter_from_query_string() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (status, body) = get_json(
        &server.base_url,
        "/products?query[orderBy]=price&query[order]=desc&query[param]=price&query[value]=10&query[operator]=greater",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(codes(&body), vec![3, 2]);
    assert_eq!(body["data"][0], json!({"code": 3, "name": "Desk", "price": 25}));
}

#[tokio::test]
async fn between_uses_repeated_value_keys() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (_, body) = get_json(
        &server.base_url,
        "/products?query[param]=price&query[value][]=10&query[value][]=25&query[operator]=between",
    )
    .await;

    assert_eq!(codes(&body), vec![2, 3]);
}

#[tokio::test]
async fn percent_encoded_brackets_are_decoded() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (_, body) = get_json(
        &server.base_url,
        "/products?query%5BorderBy%5D=name&query%5Border%5D=asc",
    )
    .await;

    assert_eq!(codes(&body), vec![3, 2, 1]);
}

#[tokio::test]
async fn unknown_operator_returns_empty_success() {
    let server = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (status, body) = get_json(
        &server.base_url,
        "/products?query[param]=price&query[value]=10&query[operator]=like",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert!(codes(&body).is_empty());
}

#[tokio::test]
async fn pagination_follows_configured_zero_policy() {
    let legacy = TestServer::spawn(catalog(), PipelineOptions::default()).await;
    let (_, body) = get_json(&legacy.base_url, "/products?query[limit]=1&query[offset]=0").await;
    assert_eq!(codes(&body), vec![1, 2, 3]);

    let (_, body) = get_json(&legacy.base_url, "/products?query[limit]=1&query[offset]=1").await;
    assert_eq!(codes(&body), vec![2]);

    let explicit = TestServer::spawn(
        catalog(),
        PipelineOptions {
            zero_pagination: ZeroPagination::Explicit,
        },
    )
    .await;
    let (_, body) = get_json(&explicit.base_url, "/products?query[limit]=1&query[offset]=0").await;
    assert_eq!(codes(&body), vec![1]);
}

#[tokio::test]
async fn empty_catalog_returns_error_envelope() {
    let server = TestServer::spawn(Vec::new(), PipelineOptions::default()).await;
    let (status, body) = get_json(&server.base_url, "/products").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"status": "error", "data": [], "message": "No data provided"})
    );
}
