//! Actor roles and the authority ordering between them

use serde::{Deserialize, Serialize};

/// Role held by a user account.
///
/// Roles are totally ordered: `Member < Moderator < Admin`. An action that
/// requires moderator authority is also satisfied by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    #[default]
    Member,
    Moderator,
    Admin,
}

impl ActorRole {
    /// Check whether this role satisfies the given requirement.
    #[must_use]
    pub fn satisfies(self, required: ActorRole) -> bool {
        self >= required
    }

    /// String form used in claims and audit details.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
