//! Upload endpoints — the parse and match pipelines.
//!
//! Only malformed multipart input is rejected with an [`AppError`] before
//! the pipelines run. Every failure inside the pipelines is converted here
//! into the error-shaped JSON bodies the endpoints promise, so callers
//! always receive well-formed JSON.

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::cache::content_hash;
use crate::errors::AppError;
use crate::extract::{extract_text, significant_chars, MIN_SIGNIFICANT_CHARS};
use crate::matcher::{rank_matches, score_jobs, MatchResult};
use crate::parser::parse_resume_text;
use crate::state::AppState;

/// POST /parse-resume
///
/// Multipart upload with a single `file` field. Returns the extracted
/// record, served from the cache when the same bytes were seen before.
pub async fn parse_resume_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let bytes = read_file_field(multipart).await?;
    let hash = content_hash(&bytes);

    if let Some(record) = state.cache.lookup(&hash).await {
        info!("parse-resume cache hit for {hash}");
        return Ok(Json(json!(record)));
    }

    // The parse path proceeds with whatever text was obtained, empty or not.
    let text = extract_text(&bytes);
    let record = parse_resume_text(&text);
    state.cache.store(&hash, &record).await;
    Ok(Json(json!(record)))
}

/// POST /match-resume
///
/// Multipart upload with a single `file` field. Returns the top job matches
/// for the resume, or an error-shaped body with an empty match list.
pub async fn match_resume_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let bytes = read_file_field(multipart).await?;

    let text = extract_text(&bytes);
    if significant_chars(&text) < MIN_SIGNIFICANT_CHARS {
        return Ok(Json(unreadable_document_response()));
    }

    match run_match(&state, &text).await {
        Ok(matches) => Ok(Json(json!({ "matches": matches }))),
        Err(e) => {
            warn!("match-resume failed: {e:#}");
            Ok(Json(json!({ "error": e.to_string(), "matches": [] })))
        }
    }
}

async fn run_match(state: &AppState, resume_text: &str) -> anyhow::Result<Vec<MatchResult>> {
    let jobs = state.jobs.fetch_jobs().await?;
    let scored = score_jobs(state.embedder.as_ref(), resume_text, jobs).await?;
    Ok(rank_matches(scored))
}

fn unreadable_document_response() -> Value {
    json!({ "error": "Could not extract text from file", "matches": [] })
}

/// Pulls the bytes of the `file` field out of a multipart upload.
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read file field: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(AppError::Validation("missing 'file' field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_document_response_shape() {
        assert_eq!(
            unreadable_document_response(),
            json!({ "error": "Could not extract text from file", "matches": [] })
        );
    }
}
