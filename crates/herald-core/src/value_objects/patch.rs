//! Field-level patch semantics for merge-style document updates
//!
//! The document store applies partial-field upserts: an update may set a
//! field, delete it, or leave it untouched. `Patch` renders those three
//! states in types so callers cannot confuse "don't touch" with "clear".

use chrono::{DateTime, Utc};

use crate::entities::UserStatus;

/// A single field in a merge-style update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value as-is.
    Keep,
    /// Remove the stored value.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    /// Apply this patch to an optional field in place.
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *field = None,
            Self::Set(value) => *field = Some(value),
        }
    }

    /// True unless this patch is `Keep`.
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Keep)
    }
}

/// Partial update of a user's moderation fields.
///
/// Built by the sanction engine and applied by the store as one merge
/// write. Fields left at their defaults are not touched, so concurrent
/// updates to disjoint fields do not clobber each other.
#[derive(Debug, Clone, Default)]
pub struct ModerationPatch {
    pub status: Option<UserStatus>,
    pub muted_until: Patch<DateTime<Utc>>,
    pub banned_until: Patch<DateTime<Utc>>,
    pub shadow_banned: Option<bool>,
    pub last_sanction_reason: Patch<String>,
    /// Atomically increment the user's sanction counter.
    pub bump_sanction_count: bool,
}
