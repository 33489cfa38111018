//! User entity - account record with device tokens and moderation state

use chrono::{DateTime, Utc};

use crate::value_objects::{ActorRole, ModerationPatch};

/// Moderation status of a user account.
///
/// Expiry timestamps (`muted_until`, `banned_until`) are advisory metadata:
/// nothing in this core transitions a user back to `Active` when they pass.
/// Enforcement happens at read/authorization time elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Muted,
    Banned,
    ShadowBanned,
}

impl UserStatus {
    /// String form stored in documents and audit details.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Muted => "muted",
            Self::Banned => "banned",
            Self::ShadowBanned => "shadowBanned",
        }
    }
}

/// Authorization claims mirrored into a user's credential.
///
/// Claims propagate to clients asynchronously after a role change; the
/// persisted `role` field is the authoritative source and claims are only
/// a fallback when that read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthClaims {
    pub role: ActorRole,
    pub admin: bool,
    pub moderator: bool,
    pub banned: bool,
}

impl AuthClaims {
    /// Rewrite the role-derived claims, preserving the `banned` claim.
    pub fn mirror_role(&mut self, role: ActorRole) {
        self.role = role;
        self.admin = role == ActorRole::Admin;
        self.moderator = role == ActorRole::Moderator;
    }
}

/// User account entity.
///
/// `device_token` is the legacy single-token field kept for older clients;
/// `device_tokens` is the multi-device set. Delivery always works on the
/// merged view (see [`User::merged_tokens`]).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub device_token: Option<String>,
    pub device_tokens: Vec<String>,
    pub status: UserStatus,
    pub shadow_banned: bool,
    pub muted_until: Option<DateTime<Utc>>,
    pub banned_until: Option<DateTime<Utc>>,
    pub sanction_count: i64,
    pub last_sanction_reason: Option<String>,
    pub role: ActorRole,
    pub claims: AuthClaims,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with no device tokens.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            device_token: None,
            device_tokens: Vec::new(),
            status: UserStatus::Active,
            shadow_banned: false,
            muted_until: None,
            banned_until: None,
            sanction_count: 0,
            last_sanction_reason: None,
            role: ActorRole::Member,
            claims: AuthClaims::default(),
            last_seen: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the legacy single token and the multi-token set into a
    /// deduplicated list, preserving first-seen order. Empty strings are
    /// dropped.
    #[must_use]
    pub fn merged_tokens(&self) -> Vec<String> {
        let mut merged = Vec::new();
        let candidates = self
            .device_token
            .iter()
            .chain(self.device_tokens.iter());
        for token in candidates {
            if !token.is_empty() && !merged.iter().any(|t| t == token) {
                merged.push(token.clone());
            }
        }
        merged
    }

    /// Apply a merge-style moderation patch to this record.
    pub fn apply_moderation(&mut self, patch: &ModerationPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        patch.muted_until.clone().apply_to(&mut self.muted_until);
        patch.banned_until.clone().apply_to(&mut self.banned_until);
        if let Some(shadow) = patch.shadow_banned {
            self.shadow_banned = shadow;
        }
        patch
            .last_sanction_reason
            .clone()
            .apply_to(&mut self.last_sanction_reason);
        if patch.bump_sanction_count {
            self.sanction_count += 1;
        }
        self.updated_at = Utc::now();
    }
}
