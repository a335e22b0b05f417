/**
 * Snippet Data Structures
 *
 * The snippet model returned to clients, the draft accepted on create and
 * update, and the filters accepted by search.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A stored code snippet
///
/// `user_id` is always the identity that created the snippet; it is never
/// taken from a request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload
///
/// `description` and `language` may be omitted; `title` and `code` are
/// required and checked by [`SnippetDraft::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

impl SnippetDraft {
    /// Reject drafts without a title or without code
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title is required"));
        }
        if self.code.trim().is_empty() {
            return Err(SharedError::validation("code", "Code is required"));
        }
        Ok(())
    }
}

/// Query string of `GET /snippets/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    #[serde(default)]
    pub title: Option<String>,
    /// Case-insensitive language name
    #[serde(default)]
    pub language: Option<String>,
}

impl SearchQuery {
    /// Title filter, `None` when absent or blank
    pub fn title_filter(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Language filter, `None` when absent or blank
    pub fn language_filter(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }

    /// Whether `snippet` passes both filters
    pub fn matches(&self, snippet: &Snippet) -> bool {
        let title_ok = self.title_filter().map_or(true, |title| {
            snippet
                .title
                .to_lowercase()
                .contains(&title.to_lowercase())
        });
        let language_ok = self
            .language_filter()
            .map_or(true, |language| {
                snippet.language.to_lowercase() == language.to_lowercase()
            });
        title_ok && language_ok
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
