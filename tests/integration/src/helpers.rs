//! Test helpers for integration tests
//!
//! Spawns the full application against the in-memory store adapter and a
//! scripted push gateway, and mints caller tokens.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value as JsonValue;
use tokio::net::TcpListener;

use herald_api::{create_app, AppState};
use herald_common::config::{
    AppConfig, AppSettings, Environment, JwtConfig, ModerationConfig, PushConfig, ServerConfig,
};
use herald_common::{CallerClaims, JwtService};
use herald_core::traits::{PushGateway, PushMessage, RepoResult, SendOutcome};
use herald_service::ServiceContext;
use herald_store::MemoryStore;

/// Gateway double that records every message and replays scripted outcomes.
///
/// With no script queued, every token is acknowledged as delivered.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<PushMessage>>,
    script: Mutex<VecDeque<RepoResult<Vec<SendOutcome>>>>,
}

impl RecordingGateway {
    pub fn push_script(&self, result: RepoResult<Vec<SendOutcome>>) {
        self.script.lock().unwrap().push_back(result);
    }

    pub fn sent_messages(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushGateway for RecordingGateway {
    async fn send(&self, message: &PushMessage) -> RepoResult<Vec<SendOutcome>> {
        self.sent.lock().unwrap().push(message.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(message
                .tokens
                .iter()
                .map(|t| SendOutcome::ok(t.clone()))
                .collect()),
        }
    }
}

/// Configuration used by every test server.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "herald-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789abcdef".to_string(),
            token_expiry: 3600,
        },
        push: PushConfig {
            endpoint: "http://localhost:0/send".to_string(),
            api_key: "test-key".to_string(),
            channel_id: "chat_channel".to_string(),
            timeout_secs: 1,
        },
        moderation: ModerationConfig {
            admin_emails: vec!["root@example.com".to_string()],
            default_mute_minutes: 30,
            default_ban_minutes: 1440,
            default_clear_limit: 50,
            delete_batch_size: 3,
        },
    }
}

/// A running test server with direct handles to its store and gateway.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub gateway: Arc<RecordingGateway>,
    jwt: JwtService,
}

impl TestApp {
    /// Start a server on an ephemeral port.
    pub async fn spawn() -> Result<Self> {
        let config = test_config();
        let store = Arc::new(MemoryStore::new());
        let gateway = Arc::new(RecordingGateway::default());

        let service_context =
            ServiceContext::from_store(store.clone(), gateway.clone(), config.clone());
        let state = AppState::new(service_context, config.clone());
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for the server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            gateway,
            jwt: JwtService::new(&config.jwt.secret, config.jwt.token_expiry),
        })
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Mint a bearer token for a caller.
    pub fn token_for(&self, user_id: &str, name: &str, admin: bool, moderator: bool) -> String {
        self.jwt
            .issue(&CallerClaims {
                user_id: user_id.to_string(),
                name: Some(name.to_string()),
                admin,
                moderator,
                ..CallerClaims::default()
            })
            .expect("token encoding")
    }

    /// POST a JSON body with an optional bearer token.
    pub async fn post_json(
        &self,
        path: &str,
        token: Option<&str>,
        body: &JsonValue,
    ) -> Result<Response> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    /// GET a path.
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }
}
