use axum::{extract::State, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::SharedState;

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    // A poisoned store lock means a handler panicked mid-write; stop
    // advertising readiness rather than serving inconsistent records.
    state
        .respondents
        .list()
        .map_err(|err| ApiError::ServiceUnavailable(format!("store check failed: {err}")))?;

    Ok(Json(json!({
        "status": "ok",
        "store": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn readyz_rejects_when_readiness_disabled() {
        let state = crate::test_state("test-key");
        state
            .readiness
            .store(false, std::sync::atomic::Ordering::SeqCst);

        let result = readyz(State(state)).await;

        match result {
            Err(ApiError::ServiceUnavailable(code)) => {
                assert!(code.contains("shutting_down"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn readyz_reports_ok_with_a_healthy_store() {
        let state = crate::test_state("test-key");

        let response = readyz(State(state)).await.unwrap();
        assert_eq!(response.0["status"], "ok");
    }
}
