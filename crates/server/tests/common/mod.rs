//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the
//! `brandcircle-server` integration tests:
//!
//! - `TestApp`: spawns the real router on a random port, configured from a
//!   temporary `config.yml` whose AI provider points at an `httpmock::MockServer`.
//! - Helpers for building interview upload forms and canned AI responses.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use brandcircle_server::{
    config,
    router,
    state::{build_app_state, AppState},
};
use httpmock::{prelude::*, Mock};
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde_json::{json, Value};
use std::{fs, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const CREATE_PATH: &str = "/api/v1/branding/create-from-interview";
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const INTERVIEW_TEXT: &str = "Q: What is the purpose of Olillac?\nA: We want every person to feel confident in their own skin.\nQ: How do you work?\nA: We formulate gentle products with dermatologists.";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: Option<TempDir>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a `local` AI provider pointed at the mock server.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();
        let config = json!({
            "port": 0,
            "providers": {
                "default": {
                    "provider": "local",
                    "api_url": mock_server.url(CHAT_COMPLETIONS_PATH),
                    "api_key": null,
                    "model_name": "mock-chat-model"
                }
            }
        });
        Self::spawn_with_config(config, mock_server).await
    }

    /// Spawns the server without any AI provider configured.
    pub async fn spawn_heuristic_only() -> Result<Self> {
        Self::spawn_with_config(json!({ "port": 0 }), MockServer::start()).await
    }

    /// Writes `config` to a temporary `config.yml`, loads it the way the
    /// binary does, and spawns the server.
    pub async fn spawn_with_config(config: Value, mock_server: MockServer) -> Result<Self> {
        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        fs::write(&config_path, serde_yaml::to_string(&config)?)?;

        let config_path = config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp config path is not valid UTF-8"))?;
        let config = config::get_config(Some(config_path))?;
        let app_state = build_app_state(config).await?;

        let mut app = TestApp::spawn_with_state(app_state, mock_server).await?;
        app._config_dir = Some(config_dir);
        Ok(app)
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: None,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Posts a multipart form to the create-from-interview endpoint.
    pub async fn upload(&self, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(CREATE_PATH))
            .multipart(form)
            .send()
            .await?)
    }

    /// Mocks one successful chat completion whose message content is `content`.
    pub fn mock_chat_completion(&self, content: &str) -> Mock<'_> {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        });
        self.mock_server.mock(|when, then| {
            when.method(POST).path(CHAT_COMPLETIONS_PATH);
            then.status(200).json_body(body);
        })
    }

    /// Mocks a failing AI provider.
    pub fn mock_chat_failure(&self, status: u16) -> Mock<'_> {
        self.mock_server.mock(|when, then| {
            when.method(POST).path(CHAT_COMPLETIONS_PATH);
            then.status(status).body("upstream unavailable");
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Form Builders ---

/// Builds a form with an `interview_file` part and an optional `brand_name`.
pub fn interview_form(
    filename: &str,
    content_type: &str,
    data: Vec<u8>,
    brand_name: Option<&str>,
) -> Result<Form> {
    let part = Part::bytes(data)
        .file_name(filename.to_string())
        .mime_str(content_type)?;
    let form = Form::new().part("interview_file", part);
    Ok(match brand_name {
        Some(name) => form.text("brand_name", name.to_string()),
        None => form,
    })
}

/// A readable interview PDF.
pub fn interview_pdf() -> Result<Vec<u8>> {
    brandcircle_test_utils::helpers::generate_test_pdf(INTERVIEW_TEXT)
}

/// A model answer in the shape the Golden Circle prompt asks for.
pub fn golden_circle_json(brand_name: Option<&str>) -> String {
    json!({
        "brand_name": brand_name,
        "golden_circle": {
            "why": "We believe everyone deserves to feel confident in their own skin.",
            "how": "We formulate gentle products together with dermatologists.",
            "what": "Olillac makes skincare for sensitive skin."
        }
    })
    .to_string()
}
