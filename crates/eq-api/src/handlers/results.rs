use axum::{
    extract::{Path, State},
    Json,
};

use eq_common::api::quiz_result::QuizResultResponse;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

/// Latest stored result for a respondent.
pub async fn latest_result(
    State(state): State<SharedState>,
    Path(nik): Path<String>,
    _auth: AuthUser,
) -> Result<Json<QuizResultResponse>, ApiError> {
    Ok(Json(state.results.latest(&nik)?))
}
