use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;

use eq_common::Respondent;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn upsert_respondent(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(respondent): Json<Respondent>,
) -> Result<Json<Respondent>, ApiError> {
    if respondent.nik.trim().is_empty() {
        return Err(ApiError::BadRequest("nik is required".into()));
    }

    state.respondents.upsert(respondent.clone())?;
    Ok(Json(respondent))
}

pub async fn list_respondents(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Respondent>>, ApiError> {
    Ok(Json(state.respondents.list()?))
}

pub async fn get_respondent(
    State(state): State<SharedState>,
    Path(nik): Path<String>,
    _auth: AuthUser,
) -> Result<Json<Respondent>, ApiError> {
    Ok(Json(state.respondents.get(&nik)?))
}

/// Remove a respondent along with any stored result.
pub async fn delete_respondent(
    State(state): State<SharedState>,
    Path(nik): Path<String>,
    _auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.respondents.remove(&nik)?;
    state.results.remove(&nik)?;
    Ok(Json(json!({ "status": "deleted", "nik": nik })))
}
