//! Snippet HTTP handlers
//!
//! All of these sit behind the authentication gate. The owner is always the
//! authenticated caller; nothing in the body or query can name another user.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::{DataResponse, MessageResponse, SearchQuery, Snippet, SnippetDraft};

const NOT_FOUND: &str = "Snippet not found";

fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.parse::<i64>().map_err(|_| {
        tracing::warn!("Invalid snippet ID: {:?}", raw);
        BackendError::validation("Invalid snippet ID")
    })
}

fn parse_draft(payload: Result<Json<SnippetDraft>, JsonRejection>) -> Result<SnippetDraft, BackendError> {
    let Json(draft) = payload.map_err(|e| {
        tracing::warn!("Rejected snippet payload: {}", e.body_text());
        BackendError::validation("Invalid request payload")
    })?;
    draft.validate()?;
    Ok(draft)
}

/// POST /snippets
pub async fn create_snippet(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<SnippetDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Snippet>>), BackendError> {
    let draft = parse_draft(payload)?;
    let snippet = state
        .snippets
        .create(caller.user_id, &draft)
        .await
        .map_err(|e| match e {
            StoreError::UnknownUser(user_id) => {
                tracing::warn!("Token names a missing user: {}", user_id);
                BackendError::not_found("User not found")
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("Snippet {} created by user {}", snippet.id, caller.user_id);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(snippet, "Snippet created successfully")),
    ))
}

/// GET /snippets
pub async fn list_snippets(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<DataResponse<Vec<Snippet>>>, BackendError> {
    let snippets = state.snippets.list_for_user(caller.user_id).await?;
    Ok(Json(DataResponse::new(snippets)))
}

/// GET /snippets/search?title=&language=
pub async fn search_snippets(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<Snippet>>>, BackendError> {
    let Query(query) = query.map_err(|e| {
        tracing::warn!("Rejected search query: {}", e.body_text());
        BackendError::validation("Invalid search query")
    })?;

    let snippets = state.snippets.search(caller.user_id, &query).await?;
    Ok(Json(DataResponse::new(snippets)))
}

/// GET /snippets/{id}
pub async fn get_snippet(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Snippet>>, BackendError> {
    let id = parse_id(&id)?;
    let snippet = state
        .snippets
        .get(caller.user_id, id)
        .await?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    Ok(Json(DataResponse::new(snippet)))
}

/// PUT /snippets/{id}
///
/// Replaces every editable field. A snippet owned by another user is
/// reported as missing.
pub async fn update_snippet(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<SnippetDraft>, JsonRejection>,
) -> Result<Json<DataResponse<Snippet>>, BackendError> {
    let id = parse_id(&id)?;
    let draft = parse_draft(payload)?;

    let snippet = state
        .snippets
        .update(caller.user_id, id, &draft)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User {} cannot update snippet {}", caller.user_id, id);
            BackendError::not_found(NOT_FOUND)
        })?;

    tracing::info!("Snippet {} updated by user {}", snippet.id, caller.user_id);

    Ok(Json(DataResponse::with_message(
        snippet,
        "Snippet updated successfully",
    )))
}

/// DELETE /snippets/{id}
pub async fn delete_snippet(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id)?;

    if !state.snippets.delete(caller.user_id, id).await? {
        tracing::warn!("User {} cannot delete snippet {}", caller.user_id, id);
        return Err(BackendError::not_found(NOT_FOUND));
    }

    tracing::info!("Snippet {} deleted by user {}", id, caller.user_id);

    Ok(Json(MessageResponse::new("Snippet deleted successfully")))
}
