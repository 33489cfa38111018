//! Shared fixtures for service-layer unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use herald_common::config::{
    AppConfig, AppSettings, Environment, JwtConfig, ModerationConfig, PushConfig, ServerConfig,
};
use herald_core::entities::User;
use herald_core::traits::{PushGateway, PushMessage, RepoResult, SendOutcome};
use herald_core::value_objects::ActorRole;
use herald_store::MemoryStore;

use super::context::ServiceContext;

/// Gateway double that records every message and replays scripted outcomes.
///
/// With no script queued, every token is acknowledged as delivered.
#[derive(Default)]
pub(crate) struct RecordingGateway {
    pub sent: Mutex<Vec<PushMessage>>,
    pub script: Mutex<VecDeque<RepoResult<Vec<SendOutcome>>>>,
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

pub(crate) fn test_config() -> AppConfig {
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
            secret: "test-secret-at-least-32-characters".to_string(),
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

/// Build a context over a fresh in-memory store and a recording gateway.
pub(crate) fn test_context() -> (ServiceContext, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let ctx = ServiceContext::from_store(
        Arc::new(MemoryStore::new()),
        gateway.clone(),
        test_config(),
    );
    (ctx, gateway)
}

/// Seed a user holding the given role.
pub(crate) async fn seed_user_with_role(ctx: &ServiceContext, id: &str, role: ActorRole) {
    let mut user = User::new(id, id);
    user.role = role;
    user.claims.mirror_role(role);
    ctx.user_repo().upsert(&user).await.unwrap();
}

/// Seed a user with the given device tokens.
pub(crate) async fn seed_user_with_tokens(ctx: &ServiceContext, id: &str, tokens: &[&str]) {
    let mut user = User::new(id, id);
    user.device_tokens = tokens.iter().map(ToString::to_string).collect();
    ctx.user_repo().upsert(&user).await.unwrap();
}
