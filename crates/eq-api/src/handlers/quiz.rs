use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use tracing::info;

use eq_common::api::question_response::QuestionBankResponse;
use eq_common::api::quiz_result::QuizResultResponse;
use eq_common::api::run_request::RunQuizRequest;
use eq_common::scoring::{self, parse_quiz_type};
use eq_common::QuizType;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

/// Upsert the respondent, run the scoring engine, store the result
/// (latest-wins), and return the full payload.
pub async fn run_quiz(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(request): Json<RunQuizRequest>,
) -> Result<Json<QuizResultResponse>, ApiError> {
    if request.nik.trim().is_empty() {
        return Err(ApiError::BadRequest("nik is required".into()));
    }

    let quiz_type = match request.quiz_type.as_deref() {
        Some(raw) => parse_quiz_type(raw)?,
        None => QuizType::default(),
    };

    let respondent = request.respondent();
    let analysis = scoring::analyze(&request.answers, respondent.age, quiz_type)?;
    let result = QuizResultResponse::from_analysis(&respondent, quiz_type, analysis, Utc::now());

    state.respondents.upsert(respondent)?;
    state.results.upsert(result.clone())?;

    info!(
        nik = %result.nik,
        category = %result.career.category,
        percentage = result.percentage,
        confidence = %result.confidence_level,
        "quiz scored"
    );

    Ok(Json(result))
}

/// Static question bank for a quiz type; unknown types are a 400.
pub async fn question_bank(
    Path(quiz_type): Path<String>,
    _auth: AuthUser,
) -> Result<Json<QuestionBankResponse>, ApiError> {
    let quiz_type = parse_quiz_type(&quiz_type)?;
    Ok(Json(QuestionBankResponse::for_quiz_type(quiz_type)))
}
