use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;
use tracing::instrument;

use crate::category::Category;
use crate::scoring::selector::ConfidenceLevel;
use crate::scoring::{combiner, narrative, selector, trait_scorer, AnswerSet, ScoreVector};
use crate::QuizType;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 65;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("answers must not be empty")]
    EmptyAnswers,
    #[error("age {0} outside supported range {MIN_AGE}-{MAX_AGE}")]
    AgeOutOfRange(u32),
    #[error("unknown quiz type: {0}")]
    InvalidQuizType(String),
    #[error("analysis produced no positive category score")]
    InvalidAnalysisResult,
}

/// Complete output of one scoring run. Built once, handed to the caller,
/// never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAnalysis {
    pub category: Category,
    pub percentage: f64,
    pub confidence: ConfidenceLevel,
    pub narrative: String,
    pub personality_scores: ScoreVector,
    pub economic_scores: ScoreVector,
    pub final_scores: ScoreVector,
    pub secondary_matches: Vec<(Category, f64)>,
    pub advisories: Vec<String>,
}

pub fn parse_quiz_type(value: &str) -> Result<QuizType, AnalysisError> {
    QuizType::from_str(value).map_err(|_| AnalysisError::InvalidQuizType(value.to_string()))
}

/// Stateless scoring pipeline: answers -> trait scores -> combined
/// scores -> selection -> narrative. Identical input yields identical
/// output.
#[derive(Debug, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, answers))]
    pub fn analyze(
        &self,
        answers: &HashMap<String, f64>,
        age: u32,
        quiz_type: QuizType,
    ) -> Result<QuizAnalysis, AnalysisError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AnalysisError::AgeOutOfRange(age));
        }
        let answers = AnswerSet::from_map(answers)?;

        let personality_scores = match quiz_type {
            QuizType::Personality | QuizType::Comprehensive => {
                trait_scorer::personality_scores(&answers)
            }
            QuizType::Economic => ScoreVector::new(),
        };
        let economic_scores = match quiz_type {
            QuizType::Economic | QuizType::Comprehensive => {
                trait_scorer::economic_scores(&answers)
            }
            QuizType::Personality => ScoreVector::new(),
        };

        let final_scores = combiner::combine(&personality_scores, &economic_scores, age)?;
        let selection = selector::select(&final_scores, &answers);

        let narrative = narrative::narrative_for(
            selection.category,
            personality_scores
                .get(&selection.category)
                .copied()
                .unwrap_or(0.0),
            economic_scores.get(&selection.category).copied(),
        );
        let advisories = narrative::advisories_for(selection.unclamped);
        let secondary_matches = selector::secondary_matches(&final_scores, selection.category);

        Ok(QuizAnalysis {
            category: selection.category,
            percentage: selection.percentage,
            confidence: selection.confidence,
            narrative,
            personality_scores,
            economic_scores,
            final_scores,
            secondary_matches,
            advisories,
        })
    }
}

/// Convenience wrapper for callers that do not hold an engine.
pub fn analyze(
    answers: &HashMap<String, f64>,
    age: u32,
    quiz_type: QuizType,
) -> Result<QuizAnalysis, AnalysisError> {
    AnalysisEngine::new().analyze(answers, age, quiz_type)
}
