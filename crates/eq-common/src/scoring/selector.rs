use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::category::Category;
use crate::scoring::{AnswerSet, ScoreVector};

/// Reported percentage bounds: a weak match still reads as 68%, and
/// perfection is never claimed.
pub const PERCENTAGE_FLOOR: f64 = 68.0;
pub const PERCENTAGE_CEILING: f64 = 98.0;

const CONFIDENCE_HIGH: f64 = 80.0;
const CONFIDENCE_MEDIUM: f64 = 60.0;

/// How decisively the top category beat its rivals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr,
)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub category: Category,
    /// Final score of the selected category, before the consistency bonus.
    pub raw_score: f64,
    pub consistency_bonus: f64,
    /// raw_score + consistency_bonus, before the [68, 98] clamp. The
    /// advisory thresholds read this value.
    pub unclamped: f64,
    pub percentage: f64,
    pub confidence: ConfidenceLevel,
}

/// Pick the strictly-maximum category; ties fall to the earlier entry in
/// the fixed enumeration order.
pub fn best_category(final_scores: &ScoreVector) -> (Category, f64) {
    let mut best = (Category::ALL[0], f64::MIN);
    for category in Category::ALL {
        let score = final_scores.get(&category).copied().unwrap_or(0.0);
        if score > best.1 {
            best = (category, score);
        }
    }
    best
}

/// Population variance of every supplied answer value, both tracks as
/// one sample. Fewer than two values yields no bonus.
pub fn consistency_bonus(answers: &AnswerSet) -> f64 {
    if answers.len() < 2 {
        return 0.0;
    }

    let n = answers.len() as f64;
    let mean = answers.values().sum::<f64>() / n;
    let variance = answers
        .values()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / n;

    (5.0 - variance).clamp(0.0, 5.0)
}

/// Confidence score over the five final scores: dominance of the top
/// score, the gap to the runner-up, and how tight the distribution is.
pub fn confidence(final_scores: &ScoreVector) -> (f64, ConfidenceLevel) {
    let (best, top_score) = best_category(final_scores);

    let second_score = final_scores
        .iter()
        .filter(|(category, _)| **category != best)
        .map(|(_, score)| *score)
        .fold(0.0_f64, f64::max);
    let gap = top_score - second_score;

    let n = final_scores.len().max(1) as f64;
    let mean = final_scores.values().sum::<f64>() / n;
    let std_dev = (final_scores
        .values()
        .map(|score| (score - mean).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();

    let score =
        (0.6 * top_score + 0.25 * (gap * 2.0) + 0.15 * (100.0 - std_dev)).clamp(0.0, 100.0);

    let level = if score >= CONFIDENCE_HIGH {
        ConfidenceLevel::High
    } else if score >= CONFIDENCE_MEDIUM {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    (score, level)
}

pub fn select(final_scores: &ScoreVector, answers: &AnswerSet) -> Selection {
    let (category, raw_score) = best_category(final_scores);
    let bonus = consistency_bonus(answers);
    let unclamped = raw_score + bonus;
    let (_, confidence) = confidence(final_scores);

    Selection {
        category,
        raw_score,
        consistency_bonus: bonus,
        unclamped,
        percentage: unclamped.clamp(PERCENTAGE_FLOOR, PERCENTAGE_CEILING),
        confidence,
    }
}

/// Remaining categories ordered by descending final score; ties keep the
/// fixed enumeration order.
pub fn secondary_matches(final_scores: &ScoreVector, best: Category) -> Vec<(Category, f64)> {
    let mut rest: Vec<(Category, f64)> = Category::ALL
        .iter()
        .filter(|category| **category != best)
        .map(|category| (*category, final_scores.get(category).copied().unwrap_or(0.0)))
        .collect();

    rest.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vector(scores: [f64; 5]) -> ScoreVector {
        Category::ALL.iter().copied().zip(scores).collect()
    }

    fn answer_set(pairs: &[(&str, f64)]) -> AnswerSet {
        let map: HashMap<String, f64> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        AnswerSet::from_map(&map).unwrap()
    }

    #[test]
    fn ties_resolve_to_the_earlier_category() {
        let scores = vector([80.0, 80.0, 70.0, 60.0, 50.0]);
        assert_eq!(best_category(&scores).0, Category::Analyst);

        let scores = vector([70.0, 80.0, 80.0, 60.0, 50.0]);
        assert_eq!(best_category(&scores).0, Category::Marketing);
    }

    #[test]
    fn identical_answers_earn_the_full_consistency_bonus() {
        let answers = answer_set(&[("q1", 4.0), ("q2", 4.0), ("q3", 4.0)]);
        assert_eq!(consistency_bonus(&answers), 5.0);
    }

    #[test]
    fn scattered_answers_earn_no_bonus() {
        let answers = answer_set(&[("q1", 1.0), ("q2", 5.0), ("q3", 1.0), ("q4", 5.0)]);
        assert_eq!(consistency_bonus(&answers), 0.0);
    }

    #[test]
    fn single_answer_earns_no_bonus() {
        let answers = answer_set(&[("q1", 3.0)]);
        assert_eq!(consistency_bonus(&answers), 0.0);
    }

    #[test]
    fn percentage_respects_floor_and_ceiling() {
        let weak = select(&vector([10.0, 5.0, 5.0, 5.0, 5.0]), &answer_set(&[("q1", 3.0)]));
        assert_eq!(weak.percentage, PERCENTAGE_FLOOR);

        let strong = select(
            &vector([100.0, 10.0, 10.0, 10.0, 10.0]),
            &answer_set(&[("q1", 5.0), ("q2", 5.0)]),
        );
        assert_eq!(strong.percentage, PERCENTAGE_CEILING);
        assert!(strong.unclamped > PERCENTAGE_CEILING);
    }

    #[test]
    fn confidence_is_monotone_in_the_winning_gap() {
        // Same top score, same rivals apart from the runner-up closing in.
        let decisive = confidence(&vector([90.0, 40.0, 40.0, 40.0, 40.0]));
        let contested = confidence(&vector([90.0, 85.0, 40.0, 40.0, 40.0]));
        assert!(decisive.0 > contested.0);
    }

    #[test]
    fn confidence_labels_map_from_score_bands() {
        let (score, level) = confidence(&vector([95.0, 20.0, 20.0, 20.0, 20.0]));
        assert!(score >= 80.0);
        assert_eq!(level, ConfidenceLevel::High);

        let (_, level) = confidence(&vector([40.0, 38.0, 36.0, 34.0, 32.0]));
        assert_eq!(level, ConfidenceLevel::Low);
    }

    #[test]
    fn secondary_matches_exclude_the_winner_and_sort_descending() {
        let scores = vector([90.0, 50.0, 70.0, 60.0, 80.0]);
        let rest = secondary_matches(&scores, Category::Analyst);

        assert_eq!(rest.len(), 4);
        assert_eq!(rest[0], (Category::Management, 80.0));
        assert!(rest.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(rest.iter().all(|(category, _)| *category != Category::Analyst));
    }
}
