//! In-memory store
//!
//! Implements both `UserStore` and `SnippetStore` over a single lock-guarded
//! map. Used by the test suites and as the fallback when no database is
//! configured; data does not survive a restart.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::backend::auth::users::{User, UserStore};
use crate::backend::snippets::db::SnippetStore;
use crate::backend::store::StoreError;
use crate::shared::{SearchQuery, Snippet, SnippetDraft};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    snippets: BTreeMap<i64, Snippet>,
    next_user_id: i64,
    next_snippet_id: i64,
}

/// Process-local store; cheap to share behind an `Arc`
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn owned_by(tables: &Tables, user_id: i64, query: Option<&SearchQuery>) -> Vec<Snippet> {
        let mut snippets: Vec<Snippet> = tables
            .snippets
            .values()
            .filter(|s| s.user_id == user_id)
            .filter(|s| query.map_or(true, |q| q.matches(s)))
            .cloned()
            .collect();
        snippets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        snippets
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.write()?;
        if tables.users.values().any(|u| u.username == username) {
            return Err(StoreError::Conflict("username"));
        }

        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.read()?;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let tables = self.read()?;
        Ok(tables.users.get(&id).cloned())
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn create(&self, user_id: i64, draft: &SnippetDraft) -> Result<Snippet, StoreError> {
        let mut tables = self.write()?;
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::UnknownUser(user_id));
        }

        tables.next_snippet_id += 1;
        let now = Utc::now();
        let snippet = Snippet {
            id: tables.next_snippet_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            code: draft.code.clone(),
            language: draft.language.clone(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        tables.snippets.insert(snippet.id, snippet.clone());
        Ok(snippet)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Snippet>, StoreError> {
        let tables = self.read()?;
        Ok(Self::owned_by(&tables, user_id, None))
    }

    async fn search(&self, user_id: i64, query: &SearchQuery) -> Result<Vec<Snippet>, StoreError> {
        let tables = self.read()?;
        Ok(Self::owned_by(&tables, user_id, Some(query)))
    }

    async fn get(&self, user_id: i64, id: i64) -> Result<Option<Snippet>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .snippets
            .get(&id)
            .filter(|s| s.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        draft: &SnippetDraft,
    ) -> Result<Option<Snippet>, StoreError> {
        let mut tables = self.write()?;
        let Some(snippet) = tables.snippets.get_mut(&id).filter(|s| s.user_id == user_id) else {
            return Ok(None);
        };

        snippet.title = draft.title.clone();
        snippet.description = draft.description.clone();
        snippet.code = draft.code.clone();
        snippet.language = draft.language.clone();
        snippet.updated_at = Utc::now();
        Ok(Some(snippet.clone()))
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        let owned = tables
            .snippets
            .get(&id)
            .is_some_and(|s| s.user_id == user_id);
        if owned {
            tables.snippets.remove(&id);
        }
        Ok(owned)
    }
}
