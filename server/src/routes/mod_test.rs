use std::path::PathBuf;

use client::net::auth::AuthConfig;

use super::*;

/// Site root under the temp dir holding a stub `pkg/documanager.css`.
fn temp_site_root(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("documanager-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg/documanager.css"), ".btn { color: red; }\n").unwrap();
    root
}

fn full_app(site_root: &std::path::Path) -> Router {
    let config = ServerConfig {
        port: 0,
        auth: AuthConfig::new("https://auth.example.com/", "proj-1").unwrap(),
    };
    let options = LeptosOptions::builder()
        .output_name("documanager")
        .site_root(site_root.to_string_lossy().into_owned())
        .build();
    app_with_options(&config, options)
}

async fn serve(app: Router) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, server)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (addr, server) = serve(health_routes()).await;

    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    server.abort();
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let (addr, server) = serve(health_routes()).await;

    let resp = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    server.abort();
}

#[tokio::test]
async fn full_app_serves_bundle_health_and_shell() {
    let site_root = temp_site_root("routes");
    let (addr, server) = serve(full_app(&site_root)).await;

    let css = reqwest::get(format!("http://{addr}/pkg/documanager.css")).await.unwrap();
    assert_eq!(css.status(), reqwest::StatusCode::OK);
    assert_eq!(css.text().await.unwrap(), ".btn { color: red; }\n");

    let missing = reqwest::get(format!("http://{addr}/pkg/missing.wasm")).await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    let health = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);

    let page = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(page.status(), reqwest::StatusCode::OK);
    let body = page.text().await.unwrap();
    assert!(body.contains("DocuManager"), "{body}");
    assert!(body.contains("documanager:auth-url"), "{body}");
    assert!(body.contains("https://auth.example.com"), "{body}");
    assert!(body.contains("proj-1"), "{body}");

    server.abort();

    let _ = std::fs::remove_dir_all(site_root);
}
