use crate::category::Category;
use crate::questions::{EconomicFactor, ECONOMIC_QUESTIONS};
use crate::scoring::weights::{ECONOMIC_WEIGHTS, PERSONALITY_COEFFICIENTS};
use crate::scoring::{AnswerSet, ScoreVector};

fn zeroed_vector() -> ScoreVector {
    Category::ALL.iter().map(|c| (*c, 0.0)).collect()
}

/// Personality track: accumulate coefficient x normalized answer weight
/// per category, then rescale so the top category is exactly 100.
/// Unanswered or unrecognized questions contribute nothing.
pub fn personality_scores(answers: &AnswerSet) -> ScoreVector {
    let mut totals = zeroed_vector();

    for entry in &PERSONALITY_COEFFICIENTS {
        let Some(value) = answers.get(entry.id) else {
            continue;
        };
        // 1-5 Likert answer -> weight in [0,1].
        let weight = (value - 1.0) / 4.0;
        for coefficient in entry.coefficients {
            if let Some(total) = totals.get_mut(&coefficient.category) {
                *total += coefficient.weight * weight;
            }
        }
    }

    let max = totals.values().copied().fold(0.0_f64, f64::max);
    let denominator = if max > 0.0 { max } else { 1.0 };
    for total in totals.values_mut() {
        *total = (*total / denominator) * 100.0;
    }

    totals
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct EconomicFactors {
    risk_tolerance: f64,
    investment_preference: f64,
    income_stability: f64,
    growth_potential: f64,
}

fn economic_factors(answers: &AnswerSet) -> EconomicFactors {
    let mut factors = EconomicFactors::default();

    for question in &ECONOMIC_QUESTIONS {
        let Some(value) = answers.get(question.id) else {
            continue;
        };
        match question.factor {
            Some(EconomicFactor::RiskTolerance) => factors.risk_tolerance = value,
            Some(EconomicFactor::InvestmentPreference) => factors.investment_preference = value,
            Some(EconomicFactor::IncomeStability) => factors.income_stability = value,
            Some(EconomicFactor::GrowthPotential) => factors.growth_potential = value,
            None => {}
        }
    }

    factors
}

/// Economic track: weighted 4-factor composite per category, left on the
/// raw scale (no 0-100 rescaling). The risk factor is inverted so a low
/// stated risk tolerance favors risk-averse categories.
pub fn economic_scores(answers: &AnswerSet) -> ScoreVector {
    let factors = economic_factors(answers);

    ECONOMIC_WEIGHTS
        .iter()
        .map(|entry| {
            let score = ((5.0 - factors.risk_tolerance) * entry.risk
                + factors.investment_preference * entry.investment
                + factors.income_stability * entry.stability
                + factors.growth_potential * entry.growth)
                / 4.0;
            (entry.category, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn answer_set(pairs: &[(&str, f64)]) -> AnswerSet {
        let map: HashMap<String, f64> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        AnswerSet::from_map(&map).unwrap()
    }

    #[test]
    fn top_personality_category_rescales_to_exactly_100() {
        let answers = answer_set(&[
            ("q1", 5.0),
            ("q2", 5.0),
            ("q3", 1.0),
            ("q4", 1.0),
            ("q5", 1.0),
            ("q6", 1.0),
            ("q7", 1.0),
            ("q8", 1.0),
        ]);

        let scores = personality_scores(&answers);
        assert_eq!(scores[&Category::Analyst], 100.0);
        for (category, score) in &scores {
            assert!(*score <= 100.0, "{category} exceeded 100");
            assert!(*score >= 0.0);
        }
    }

    #[test]
    fn all_neutral_answers_leave_every_category_at_zero() {
        let answers = answer_set(&[("q1", 1.0), ("q5", 1.0)]);

        let scores = personality_scores(&answers);
        assert_eq!(scores.len(), 5);
        assert!(scores.values().all(|score| *score == 0.0));
    }

    #[test]
    fn unrecognized_ids_are_ignored_not_errors() {
        let answers = answer_set(&[("q1", 5.0), ("favorite_color", 42.0)]);

        let with_noise = personality_scores(&answers);
        let clean = personality_scores(&answer_set(&[("q1", 5.0)]));
        assert_eq!(with_noise, clean);
    }

    #[test]
    fn risk_inversion_rewards_risk_averse_categories() {
        let cautious = economic_scores(&answer_set(&[("q9", 1.0)]));
        let daring = economic_scores(&answer_set(&[("q9", 5.0)]));

        // Social carries the largest risk weight, so stating low risk
        // tolerance must raise its score relative to the daring answer.
        assert!(cautious[&Category::Social] > daring[&Category::Social]);
    }

    #[test]
    fn missing_economic_factors_default_to_zero() {
        let answers = answer_set(&[("q10", 4.0)]);
        let scores = economic_scores(&answers);

        assert_eq!(scores.len(), 5);
        // risk_tolerance defaults to 0, so the inverted term is 5 * risk weight.
        let expected = (5.0 * 0.6 + 4.0 * 0.8) / 4.0;
        assert!((scores[&Category::Analyst] - expected).abs() < 1e-9);
    }

    #[test]
    fn economic_scores_stay_on_raw_scale() {
        let answers = answer_set(&[("q9", 3.0), ("q10", 3.0), ("q11", 3.0), ("q12", 3.0)]);
        let scores = economic_scores(&answers);

        // Raw composites sit in the low single digits, never 0-100.
        assert!(scores.values().all(|score| *score < 10.0));
    }
}
