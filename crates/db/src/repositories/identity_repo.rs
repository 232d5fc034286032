//! Repository for the `identities` table.

use sqlx::PgPool;

use deckhand_core::types::DbId;

use crate::models::identity::Identity;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, created_at";

/// Provides operations on identities.
pub struct IdentityRepo;

impl IdentityRepo {
    /// Find the identity for `email`, creating it if absent.
    ///
    /// The upsert makes concurrent intakes for the same new email
    /// converge on one row instead of racing the unique constraint.
    pub async fn find_or_create(pool: &PgPool, email: &str) -> Result<Identity, sqlx::Error> {
        let query = format!(
            "INSERT INTO identities (email) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_identities_email
             DO UPDATE SET email = EXCLUDED.email
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Identity>(&query)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Find an identity by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Identity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM identities WHERE email = $1");
        sqlx::query_as::<_, Identity>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Remove an identity. Its jobs go with it (ON DELETE CASCADE).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM identities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
