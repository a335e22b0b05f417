//! Database operations for snippets
//!
//! Every query takes the owner's user ID and filters on it, so a caller can
//! only read or change its own rows. A row owned by someone else is
//! indistinguishable from a missing row.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::backend::store::StoreError;
use crate::shared::{SearchQuery, Snippet, SnippetDraft};

/// Snippet persistence, scoped by owner
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Insert a snippet owned by `user_id`
    async fn create(&self, user_id: i64, draft: &SnippetDraft) -> Result<Snippet, StoreError>;

    /// All snippets of `user_id`, newest first
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Snippet>, StoreError>;

    /// Snippets of `user_id` matching `query`, newest first
    async fn search(&self, user_id: i64, query: &SearchQuery) -> Result<Vec<Snippet>, StoreError>;

    /// One snippet, if it exists and belongs to `user_id`
    async fn get(&self, user_id: i64, id: i64) -> Result<Option<Snippet>, StoreError>;

    /// Replace the editable fields; `None` if missing or not owned
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SnippetDraft,
    ) -> Result<Option<Snippet>, StoreError>;

    /// Delete; `false` if missing or not owned
    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, StoreError>;
}

/// `SnippetStore` backed by the `snippets` table
#[derive(Debug, Clone)]
pub struct PgSnippetStore {
    pool: PgPool,
}

impl PgSnippetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SNIPPET_COLUMNS: &str =
    "id, title, description, code, language, user_id, created_at, updated_at";

/// Escape LIKE wildcards so user input matches literally
fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl SnippetStore for PgSnippetStore {
    async fn create(&self, user_id: i64, draft: &SnippetDraft) -> Result<Snippet, StoreError> {
        let snippet = sqlx::query_as::<_, Snippet>(&format!(
            r#"
            INSERT INTO snippets (title, description, code, language, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SNIPPET_COLUMNS}
            "#
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.code)
        .bind(&draft.language)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_owned_write(e, user_id))?;

        Ok(snippet)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Snippet>, StoreError> {
        let snippets = sqlx::query_as::<_, Snippet>(&format!(
            r#"
            SELECT {SNIPPET_COLUMNS}
            FROM snippets
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }

    async fn search(&self, user_id: i64, query: &SearchQuery) -> Result<Vec<Snippet>, StoreError> {
        let title = query.title_filter().map(like_pattern);
        let language = query.language_filter();

        let snippets = sqlx::query_as::<_, Snippet>(&format!(
            r#"
            SELECT {SNIPPET_COLUMNS}
            FROM snippets
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR title ILIKE $2)
              AND ($3::TEXT IS NULL OR LOWER(language) = LOWER($3))
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(user_id)
        .bind(title)
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }

    async fn get(&self, user_id: i64, id: i64) -> Result<Option<Snippet>, StoreError> {
        let snippet = sqlx::query_as::<_, Snippet>(&format!(
            r#"
            SELECT {SNIPPET_COLUMNS}
            FROM snippets
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(snippet)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SnippetDraft,
    ) -> Result<Option<Snippet>, StoreError> {
        let snippet = sqlx::query_as::<_, Snippet>(&format!(
            r#"
            UPDATE snippets
            SET title = $1, description = $2, code = $3, language = $4, updated_at = NOW()
            WHERE id = $5 AND user_id = $6
            RETURNING {SNIPPET_COLUMNS}
            "#
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.code)
        .bind(&draft.language)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(snippet)
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
