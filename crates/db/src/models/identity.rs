//! Identity entity model.

use serde::Serialize;
use sqlx::FromRow;

use deckhand_core::types::{DbId, Timestamp};

/// A row from the `identities` table.
///
/// An identity groups jobs by email. Jobs uploaded without an email
/// have no owning identity at all (their `owner_id` is NULL); there is
/// no shared "anonymous" identity row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Identity {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}
