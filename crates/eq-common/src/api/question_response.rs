use serde::Serialize;

use crate::questions::{questions_for, Question};
use crate::QuizType;

/// Static question bank for one quiz type, as served over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBankResponse {
    pub quiz_type: QuizType,
    pub questions: Vec<Question>,
}

impl QuestionBankResponse {
    pub fn for_quiz_type(quiz_type: QuizType) -> Self {
        Self {
            quiz_type,
            questions: questions_for(quiz_type),
        }
    }
}
