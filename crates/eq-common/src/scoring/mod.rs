pub mod combiner;
pub mod engine;
pub mod narrative;
pub mod selector;
pub mod trait_scorer;
pub mod weights;

use std::collections::{BTreeMap, HashMap};

use crate::category::Category;

pub use engine::{analyze, parse_quiz_type, AnalysisError, QuizAnalysis};
pub use selector::ConfidenceLevel;

/// Per-category score map. A vector for a track that ran always holds
/// all five categories; a track that did not run yields an empty map.
pub type ScoreVector = BTreeMap<Category, f64>;

/// Validated answer set. Construction rejects an empty map; question ids
/// no coefficient table recognizes simply never get looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSet {
    inner: HashMap<String, f64>,
}

impl AnswerSet {
    pub fn from_map(answers: &HashMap<String, f64>) -> Result<Self, AnalysisError> {
        if answers.is_empty() {
            return Err(AnalysisError::EmptyAnswers);
        }
        Ok(Self {
            inner: answers.clone(),
        })
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.inner.get(id).copied()
    }

    /// Every supplied value, recognized or not; the consistency bonus
    /// treats them as one sample.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.values().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
