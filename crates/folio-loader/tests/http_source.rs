use axum::{
    Router,
    extract::RawQuery,
    http::StatusCode,
    routing::get,
};
use folio_loader::{DocumentSource, HttpSource, LoadError, Origin, load_or_default};
use folio_types::{Edition, SiteConfig};
use std::net::SocketAddr;

const DATA: &str = r#"{
    "personal": { "name": "Ada Lovelace", "title": "Analyst" },
    "projects": []
}"#;

async fn spawn_server() -> anyhow::Result<SocketAddr> {
    let app = Router::new()
        .route("/Information/portfolio-data.json", get(|| async { DATA }))
        .route(
            "/echo-query.json",
            get(|RawQuery(query): RawQuery| async move {
                format!(r#"{{"query":"{}"}}"#, query.unwrap_or_default())
            }),
        )
        .route(
            "/broken.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/garbage.json", get(|| async { "<html></html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

fn base(addr: SocketAddr) -> Option<String> {
    Some(format!("http://{addr}"))
}

#[tokio::test]
async fn fetches_the_configured_data_path() -> anyhow::Result<()> {
    let addr = spawn_server().await?;
    let source = HttpSource::from_config(base(addr), &SiteConfig::default());

    let loaded = load_or_default(&source, Edition::Student).await;
    assert_eq!(loaded.origin, Origin::Fetched);
    assert_eq!(
        loaded.document.text("personal.name").as_deref(),
        Some("Ada Lovelace")
    );
    Ok(())
}

#[tokio::test]
async fn cache_bust_adds_a_timestamp_parameter() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let busted = HttpSource::new(base(addr), "echo-query.json").with_cache_bust(true);
    let doc = busted.fetch().await?;
    let query = doc.text("query").unwrap_or_default();
    assert!(query.starts_with("t="), "unexpected query {query:?}");

    let plain = HttpSource::new(base(addr), "echo-query.json");
    let doc = plain.fetch().await?;
    assert_eq!(doc.text("query"), None);
    Ok(())
}

#[tokio::test]
async fn error_status_and_bad_body_are_reported() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let err = HttpSource::new(base(addr), "broken.json")
        .fetch()
        .await
        .expect_err("500 must fail");
    assert!(matches!(err, LoadError::Status { status: 500, .. }));

    let err = HttpSource::new(base(addr), "garbage.json")
        .fetch()
        .await
        .expect_err("html must fail");
    assert!(matches!(err, LoadError::Parse(_)));
    Ok(())
}

#[tokio::test]
async fn unreachable_resource_yields_the_default_document() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let source = HttpSource::new(base(addr), "Information/portfolio-data.json");
    let loaded = load_or_default(&source, Edition::Student).await;
    assert_eq!(loaded.origin, Origin::Fallback);
    assert_eq!(
        loaded.document.text("personal.name").as_deref(),
        Some("Tarequl Islam")
    );
    assert_eq!(
        loaded.document.text("personal.title").as_deref(),
        Some("Student Developer")
    );
    Ok(())
}
