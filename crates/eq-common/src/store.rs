use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::api::quiz_result::QuizResultResponse;
use crate::Respondent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("respondent not found: {0}")]
    RespondentNotFound(String),
    #[error("no result stored for: {0}")]
    ResultNotFound(String),
    #[error("store lock poisoned")]
    Poisoned,
}

/// In-memory respondent records keyed by nik, latest-wins.
#[derive(Debug, Default)]
pub struct RespondentStore {
    inner: RwLock<HashMap<String, Respondent>>,
}

impl RespondentStore {
    pub fn upsert(&self, respondent: Respondent) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard.insert(respondent.nik.clone(), respondent);
        Ok(())
    }

    pub fn get(&self, nik: &str) -> Result<Respondent, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        guard
            .get(nik)
            .cloned()
            .ok_or_else(|| StoreError::RespondentNotFound(nik.to_string()))
    }

    /// All respondents, ordered by nik for stable listings.
    pub fn list(&self) -> Result<Vec<Respondent>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<Respondent> = guard.values().cloned().collect();
        all.sort_by(|a, b| a.nik.cmp(&b.nik));
        Ok(all)
    }

    pub fn remove(&self, nik: &str) -> Result<Respondent, StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard
            .remove(nik)
            .ok_or_else(|| StoreError::RespondentNotFound(nik.to_string()))
    }
}

/// One stored result per respondent, latest-wins.
#[derive(Debug, Default)]
pub struct ResultStore {
    inner: RwLock<HashMap<String, QuizResultResponse>>,
}

impl ResultStore {
    pub fn upsert(&self, result: QuizResultResponse) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard.insert(result.nik.clone(), result);
        Ok(())
    }

    pub fn latest(&self, nik: &str) -> Result<QuizResultResponse, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        guard
            .get(nik)
            .cloned()
            .ok_or_else(|| StoreError::ResultNotFound(nik.to_string()))
    }

    /// Drop a respondent's result if one exists; absence is not an error
    /// here since removal rides along with respondent deletion.
    pub fn remove(&self, nik: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard.remove(nik);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scoring, QuizType};
    use chrono::Utc;
    use std::collections::HashMap as StdHashMap;

    fn respondent(nik: &str, age: u32) -> Respondent {
        Respondent {
            nik: nik.into(),
            name: format!("Respondent {nik}"),
            address: String::new(),
            age,
        }
    }

    fn result_for(nik: &str, age: u32) -> QuizResultResponse {
        let answers: StdHashMap<String, f64> = [("q1".to_string(), 4.0)].into_iter().collect();
        let analysis = scoring::analyze(&answers, age, QuizType::Personality).unwrap();
        QuizResultResponse::from_analysis(
            &respondent(nik, age),
            QuizType::Personality,
            analysis,
            Utc::now(),
        )
    }

    #[test]
    fn upsert_is_latest_wins() {
        let store = RespondentStore::default();
        store.upsert(respondent("100", 20)).unwrap();
        store.upsert(respondent("100", 21)).unwrap();

        assert_eq!(store.get("100").unwrap().age, 21);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn listing_is_ordered_by_nik() {
        let store = RespondentStore::default();
        store.upsert(respondent("200", 30)).unwrap();
        store.upsert(respondent("100", 25)).unwrap();

        let niks: Vec<_> = store.list().unwrap().into_iter().map(|r| r.nik).collect();
        assert_eq!(niks, vec!["100", "200"]);
    }

    #[test]
    fn missing_records_report_not_found() {
        let respondents = RespondentStore::default();
        assert_eq!(
            respondents.get("404").unwrap_err(),
            StoreError::RespondentNotFound("404".into())
        );

        let results = ResultStore::default();
        assert_eq!(
            results.latest("404").unwrap_err(),
            StoreError::ResultNotFound("404".into())
        );
    }

    #[test]
    fn results_overwrite_per_respondent() {
        let store = ResultStore::default();
        store.upsert(result_for("100", 20)).unwrap();
        store.upsert(result_for("100", 40)).unwrap();

        assert_eq!(store.latest("100").unwrap().age, 40);
    }

    #[test]
    fn removing_an_absent_result_is_not_an_error() {
        let store = ResultStore::default();
        assert!(store.remove("100").is_ok());
    }
}
