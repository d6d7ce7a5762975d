//! Record lifecycle timestamps (creation, update, soft deletion).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookkeeping timestamps composed into mutable records.
///
/// `deleted_at` doubles as the soft-delete marker: a record carrying one
/// stays in the store but is invisible to normal reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Stamps for a freshly created record.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Record a mutation. `created_at` never moves after creation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Place the soft-delete marker.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
