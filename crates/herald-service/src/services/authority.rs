//! Authority resolution for privileged actions
//!
//! The persisted user record's `role` field is authoritative: role changes
//! land there immediately, while token claims propagate to clients
//! asynchronously. Claims (and the configured admin email allowlist) are
//! consulted only when the stored record cannot be read, so a just-demoted
//! admin cannot keep access through a stale token.

use tracing::warn;

use herald_core::value_objects::ActorRole;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity of the caller of a privileged action, as presented by its
/// credential.
#[derive(Debug, Clone, Default)]
pub struct CallerIdentity {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Admin custom claim embedded in the credential.
    pub admin_claim: bool,
    /// Moderator custom claim embedded in the credential.
    pub moderator_claim: bool,
}

impl CallerIdentity {
    /// An authenticated caller with no claims.
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// An unauthenticated caller.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_claims(mut self, admin: bool, moderator: bool) -> Self {
        self.admin_claim = admin;
        self.moderator_claim = moderator;
        self
    }
}

/// The resolved actor of a privileged action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub display_name: String,
    pub role: ActorRole,
}

/// Resolves caller authority for the sanction engine.
pub struct AuthorityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthorityService<'a> {
    /// Create a new AuthorityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Require the caller to hold at least the given role.
    ///
    /// # Errors
    /// `Unauthenticated` when no caller identity is present,
    /// `PermissionDenied` when both authority checks come up short.
    pub async fn require(
        &self,
        caller: &CallerIdentity,
        required: ActorRole,
    ) -> ServiceResult<Actor> {
        let user_id = caller
            .user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ServiceError::Unauthenticated)?;

        let role = self.resolve_role(user_id, caller).await;
        if !role.satisfies(required) {
            return Err(ServiceError::permission_denied(format!(
                "{required} role required"
            )));
        }

        Ok(Actor {
            id: user_id.to_string(),
            display_name: caller
                .display_name
                .clone()
                .unwrap_or_else(|| user_id.to_string()),
            role,
        })
    }

    /// Resolve the caller's effective role, stored record first.
    pub async fn resolve_role(&self, user_id: &str, caller: &CallerIdentity) -> ActorRole {
        match self.ctx.user_repo().find_by_id(user_id).await {
            Ok(Some(user)) => user.role,
            Ok(None) => self.fallback_role(caller),
            Err(e) => {
                warn!(user_id, error = %e, "Role lookup failed, falling back to claims");
                self.fallback_role(caller)
            }
        }
    }

    fn fallback_role(&self, caller: &CallerIdentity) -> ActorRole {
        if caller.admin_claim {
            ActorRole::Admin
        } else if caller.moderator_claim {
            ActorRole::Moderator
        } else if caller
            .email
            .as_deref()
            .is_some_and(|email| self.ctx.config().moderation.is_admin_email(email))
        {
            ActorRole::Admin
        } else {
            ActorRole::Member
        }
    }
}
