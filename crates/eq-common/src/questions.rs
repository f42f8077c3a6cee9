use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::QuizType;

/// Which track a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionTrack {
    Personality,
    Economic,
    Comprehensive,
}

/// The four named economic factors populated directly from answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EconomicFactor {
    RiskTolerance,
    InvestmentPreference,
    IncomeStability,
    GrowthPotential,
}

/// One quiz question. All questions are answered on a 1-5 scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub track: QuestionTrack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<EconomicFactor>,
}

pub const PERSONALITY_QUESTIONS: [Question; 8] = [
    Question {
        id: "q1",
        text: "I enjoy breaking complex problems down systematically",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q2",
        text: "I prefer working with numbers and data over working with people",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q3",
        text: "I feel comfortable speaking in front of many people",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q4",
        text: "I enjoy creating something new and original",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q5",
        text: "I feel most satisfied when I can help other people",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q6",
        text: "I like leading a team and making decisions",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q7",
        text: "I prefer work with a clear structure and procedures",
        track: QuestionTrack::Personality,
        factor: None,
    },
    Question {
        id: "q8",
        text: "I am comfortable taking risks in my work",
        track: QuestionTrack::Personality,
        factor: None,
    },
];

pub const ECONOMIC_QUESTIONS: [Question; 4] = [
    Question {
        id: "q9",
        text: "How much risk are you willing to take in your career? (1 = none, 5 = a lot)",
        track: QuestionTrack::Economic,
        factor: Some(EconomicFactor::RiskTolerance),
    },
    Question {
        id: "q10",
        text: "How interested are you in investing in your own business or skills?",
        track: QuestionTrack::Economic,
        factor: Some(EconomicFactor::InvestmentPreference),
    },
    Question {
        id: "q11",
        text: "How important is a stable monthly income to you?",
        track: QuestionTrack::Economic,
        factor: Some(EconomicFactor::IncomeStability),
    },
    Question {
        id: "q12",
        text: "How important is career growth potential when choosing work?",
        track: QuestionTrack::Economic,
        factor: Some(EconomicFactor::GrowthPotential),
    },
];

// Asked only on the comprehensive quiz; ignored by both scorers but it
// still counts toward the answer-consistency variance.
pub const COMPREHENSIVE_EXTRA_QUESTIONS: [Question; 1] = [Question {
    id: "q13",
    text: "Overall, how confident are you about your current career direction?",
    track: QuestionTrack::Comprehensive,
    factor: None,
}];

/// The fixed question bank for a quiz type. Comprehensive is the
/// concatenation of both tracks plus the comprehensive-only question.
pub fn questions_for(quiz_type: QuizType) -> Vec<Question> {
    match quiz_type {
        QuizType::Personality => PERSONALITY_QUESTIONS.to_vec(),
        QuizType::Economic => ECONOMIC_QUESTIONS.to_vec(),
        QuizType::Comprehensive => PERSONALITY_QUESTIONS
            .iter()
            .chain(ECONOMIC_QUESTIONS.iter())
            .chain(COMPREHENSIVE_EXTRA_QUESTIONS.iter())
            .copied()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_have_expected_sizes() {
        assert_eq!(questions_for(QuizType::Personality).len(), 8);
        assert_eq!(questions_for(QuizType::Economic).len(), 4);
        assert_eq!(questions_for(QuizType::Comprehensive).len(), 13);
    }

    #[test]
    fn question_ids_are_unique() {
        let all = questions_for(QuizType::Comprehensive);
        let mut ids: Vec<_> = all.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn every_economic_question_names_a_factor() {
        assert!(ECONOMIC_QUESTIONS.iter().all(|q| q.factor.is_some()));
        assert!(PERSONALITY_QUESTIONS.iter().all(|q| q.factor.is_none()));
    }
}
