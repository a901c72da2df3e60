//! HTTP server for the note API and the human-facing pages.

use anyhow::{Context, Result};
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

mod routes;
pub mod types;

use crate::config::ServerConfig;
use crate::store::NoteStore;
use types::ShareLinks;

/// State shared by every handler.
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub links: ShareLinks,
}

/// Build the application router around an existing store.
pub fn router(store: Arc<NoteStore>, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        links: ShareLinks::new(config.public_url.clone()),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/notes", get(routes::list_notes).post(routes::create_note))
        .route(
            "/api/notes/:id",
            get(routes::get_note).put(routes::update_note),
        )
        .route("/note/:id", get(routes::note_page))
        .route("/", get(routes::landing_page))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)))
        .layer(cors)
        .with_state(state)
}

pub struct NoteServer {
    config: ServerConfig,
    store: Arc<NoteStore>,
}

impl NoteServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: Arc::new(NoteStore::new()),
        }
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn start(self) -> Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        info!("OpenMD server running on {}", address);
        info!("API: http://localhost:{}/api/notes", port);
        info!("Web: http://localhost:{}", port);

        let app = router(self.store.clone(), &self.config);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!(
            "Server shut down, discarding {} note(s)",
            self.store.len().unwrap_or(0)
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    struct TestServer {
        base_url: String,
        store: Arc<NoteStore>,
        _public: TempDir,
    }

    async fn spawn_test_server() -> TestServer {
        let public = TempDir::new().unwrap();
        std::fs::write(public.path().join("robots.txt"), "User-agent: *\n").unwrap();

        let config = ServerConfig {
            public_dir: public.path().to_path_buf(),
            ..Default::default()
        };
        let store = Arc::new(NoteStore::new());
        let app = router(store.clone(), &config);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url: format!("http://{}", addr),
            store,
            _public: public,
        }
    }

    async fn create(client: &reqwest::Client, base: &str, body: Value) -> Value {
        let resp = client
            .post(format!("{}/api/notes", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_note_and_url() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        let created = create(&client, &server.base_url, json!({"content": "hello"})).await;
        let id = created["id"].as_str().unwrap();

        assert_eq!(created["title"], "Untitled");
        assert_eq!(created["content"], "hello");
        assert_eq!(created["metadata"], json!({}));
        assert_eq!(created["createdAt"], created["updatedAt"]);
        assert_eq!(
            created["url"].as_str().unwrap(),
            format!("{}/note/{}", server.base_url, id)
        );
    }

    #[tokio::test]
    async fn test_create_without_content_is_400() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/notes", server.base_url))
            .json(&json!({"title": "No body"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Content is required");
        assert_eq!(server.store.len().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/notes", server.base_url))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_update_and_list() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();
        let base = &server.base_url;

        let a = create(&client, base, json!({"title": "A", "content": "first"})).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        let b = create(&client, base, json!({"title": "B", "content": "second"})).await;
        let a_id = a["id"].as_str().unwrap();
        let b_id = b["id"].as_str().unwrap();

        let fetched: Note = client
            .get(format!("{}/api/notes/{}", base, a_id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(fetched.content, "first");

        tokio::time::sleep(Duration::from_millis(5)).await;
        let resp = client
            .put(format!("{}/api/notes/{}", base, a_id))
            .json(&json!({"content": "v2", "metadata": {"a": 1}}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let updated: Note = resp.json().await.unwrap();
        assert_eq!(updated.content, "v2");
        assert_eq!(updated.title, "A");
        assert!(updated.updated_at > updated.created_at);

        let updated: Note = client
            .put(format!("{}/api/notes/{}", base, a_id))
            .json(&json!({"metadata": {"b": 2}}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(Value::Object(updated.metadata), json!({"a": 1, "b": 2}));

        let listed: Vec<Note> = client
            .get(format!("{}/api/notes", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let ids: Vec<&str> = listed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![a_id, b_id]);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_404() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();
        let base = &server.base_url;

        let resp = client
            .get(format!("{}/api/notes/missing", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Note not found");

        let resp = client
            .put(format!("{}/api/notes/missing", base))
            .json(&json!({"content": "x"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);

        let resp = client
            .get(format!("{}/note/missing", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.text().await.unwrap(), "Note not found");
    }

    #[tokio::test]
    async fn test_note_page_renders_markdown() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        let created = create(
            &client,
            &server.base_url,
            json!({"title": "Doc", "content": "# Title\n\nBody", "metadata": {"author": "bot"}}),
        )
        .await;

        let resp = client
            .get(created["url"].as_str().unwrap())
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = resp.text().await.unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Body</p>"));
        assert!(html.contains("<p>author: bot</p>"));
    }

    #[tokio::test]
    async fn test_landing_page_counts_notes() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        create(&client, &server.base_url, json!({"content": "one"})).await;
        create(&client, &server.base_url, json!({"content": "two"})).await;

        let html = client
            .get(format!("{}/", server.base_url))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(html.contains("Current notes: 2"));
    }

    #[tokio::test]
    async fn test_static_files_and_cors() {
        let server = spawn_test_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("{}/robots.txt", server.base_url))
            .header("origin", "https://agent.example")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.text().await.unwrap(), "User-agent: *\n");

        let resp = client
            .get(format!("{}/missing.css", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }
}
