use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ParsedResume, ScoreBreakdown};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub data: ParsedResume,
    pub parser: String,
    /// Wall time spent in the backend, in seconds.
    pub inference_time: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl From<ParsedResume> for ScoreResponse {
    fn from(resume: ParsedResume) -> Self {
        Self {
            score: resume.score,
            score_breakdown: resume.score_breakdown,
            strengths: resume.strengths,
            improvements: resume.improvements,
        }
    }
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, AppError> {
    let Json(req) = payload?;
    let text = truncate_chars(&req.resume_text, state.config.max_input_chars);

    let start = Instant::now();
    let data = state.parser.parse(text).await?;
    let inference_time = round_millis(start.elapsed().as_secs_f64());

    info!(
        "Parse completed in {inference_time}s ({}) skills={} experience={} education={} score={}",
        state.parser.backend_id(),
        data.skills.len(),
        data.experience.len(),
        data.education.len(),
        data.score
    );

    Ok(Json(ParseResponse {
        data,
        parser: state.parser.backend_id().to_string(),
        inference_time,
    }))
}

/// POST /api/v1/resumes/score
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(req) = payload?;
    let text = truncate_chars(&req.resume_text, state.config.max_input_chars);
    let resume = state.parser.parse(text).await?;
    Ok(Json(resume.into()))
}

/// The longest prefix of `text` holding at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
