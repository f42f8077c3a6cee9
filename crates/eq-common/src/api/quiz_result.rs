use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::scoring::{ConfidenceLevel, QuizAnalysis, ScoreVector};
use crate::{QuizType, Respondent};

/// Display payload for the selected career category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInfo {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub jobs: Vec<String>,
    pub skills: Vec<String>,
}

impl CareerInfo {
    pub fn for_category(category: Category) -> Self {
        let profile = category.profile();
        Self {
            category,
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            jobs: profile.jobs.iter().map(|job| job.to_string()).collect(),
            skills: profile.skills.iter().map(|skill| skill.to_string()).collect(),
        }
    }
}

/// Per-track score breakdown returned to the GUI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub personality: ScoreVector,
    pub economic: ScoreVector,
    #[serde(rename = "final")]
    pub final_scores: ScoreVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryMatch {
    pub category: Category,
    pub score: f64,
}

/// Full result record: one per respondent, latest-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResultResponse {
    pub nik: String,
    pub name: String,
    pub age: u32,
    pub quiz_type: QuizType,

    pub career: CareerInfo,
    pub percentage: f64,
    pub confidence_level: ConfidenceLevel,
    pub narrative: String,

    pub scores: ScoreBreakdown,
    pub secondary_matches: Vec<SecondaryMatch>,
    pub advisories: Vec<String>,

    pub engine_version: String,
    pub analyzed_at: DateTime<Utc>,
}

impl QuizResultResponse {
    pub fn from_analysis(
        respondent: &Respondent,
        quiz_type: QuizType,
        analysis: QuizAnalysis,
        analyzed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            nik: respondent.nik.clone(),
            name: respondent.name.clone(),
            age: respondent.age,
            quiz_type,
            career: CareerInfo::for_category(analysis.category),
            percentage: analysis.percentage,
            confidence_level: analysis.confidence,
            narrative: analysis.narrative,
            scores: ScoreBreakdown {
                personality: analysis.personality_scores,
                economic: analysis.economic_scores,
                final_scores: analysis.final_scores,
            },
            secondary_matches: analysis
                .secondary_matches
                .into_iter()
                .map(|(category, score)| SecondaryMatch { category, score })
                .collect(),
            advisories: analysis.advisories,
            engine_version: crate::scoring::engine::ENGINE_VERSION.to_string(),
            analyzed_at,
        }
    }
}
