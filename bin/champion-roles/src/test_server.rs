use axum::Router;
use tokio::net::TcpListener;

/// Serve the router built by `router` on a free local port and return its
/// base URL. The router is given that URL so responses can link back to it.
pub async fn serve(router: impl FnOnce(&str) -> Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let app = router(&base_url);
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    base_url
}

/// HTTP client that reaches the local server even when a proxy is configured.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
