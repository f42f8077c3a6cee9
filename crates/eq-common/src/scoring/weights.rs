use crate::category::Category;

/// One category's share of a personality question.
#[derive(Debug, Clone, Copy)]
pub struct TraitCoefficient {
    pub category: Category,
    pub weight: f64,
}

/// Coefficient entry for one personality question. Categories absent
/// from `coefficients` contribute 0 for that question.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityEntry {
    pub id: &'static str,
    pub coefficients: &'static [TraitCoefficient],
}

const fn coef(category: Category, weight: f64) -> TraitCoefficient {
    TraitCoefficient { category, weight }
}

pub const PERSONALITY_COEFFICIENTS: [PersonalityEntry; 8] = [
    PersonalityEntry {
        id: "q1",
        coefficients: &[
            coef(Category::Analyst, 1.0),
            coef(Category::Management, 0.4),
        ],
    },
    PersonalityEntry {
        id: "q2",
        coefficients: &[coef(Category::Analyst, 0.9), coef(Category::Marketing, 0.3)],
    },
    PersonalityEntry {
        id: "q3",
        coefficients: &[
            coef(Category::Marketing, 1.0),
            coef(Category::Social, 0.5),
            coef(Category::Management, 0.4),
        ],
    },
    PersonalityEntry {
        id: "q4",
        coefficients: &[coef(Category::Creative, 1.0), coef(Category::Marketing, 0.3)],
    },
    PersonalityEntry {
        id: "q5",
        coefficients: &[coef(Category::Social, 1.0), coef(Category::Management, 0.3)],
    },
    PersonalityEntry {
        id: "q6",
        coefficients: &[
            coef(Category::Management, 1.0),
            coef(Category::Social, 0.3),
            coef(Category::Marketing, 0.2),
        ],
    },
    PersonalityEntry {
        id: "q7",
        coefficients: &[coef(Category::Analyst, 0.6), coef(Category::Management, 0.6)],
    },
    PersonalityEntry {
        id: "q8",
        coefficients: &[coef(Category::Creative, 0.7), coef(Category::Marketing, 0.6)],
    },
];

/// Fixed 4-factor weighting for one category's economic score. The risk
/// term is applied to the inverted answer (5 - risk_tolerance): a low
/// stated risk tolerance raises the score of risk-averse categories.
#[derive(Debug, Clone, Copy)]
pub struct EconomicEntry {
    pub category: Category,
    pub risk: f64,
    pub investment: f64,
    pub stability: f64,
    pub growth: f64,
}

pub const ECONOMIC_WEIGHTS: [EconomicEntry; 5] = [
    EconomicEntry {
        category: Category::Analyst,
        risk: 0.6,
        investment: 0.8,
        stability: 0.7,
        growth: 0.6,
    },
    EconomicEntry {
        category: Category::Marketing,
        risk: 0.2,
        investment: 0.7,
        stability: 0.4,
        growth: 1.0,
    },
    EconomicEntry {
        category: Category::Creative,
        risk: 0.1,
        investment: 0.5,
        stability: 0.2,
        growth: 0.8,
    },
    EconomicEntry {
        category: Category::Social,
        risk: 0.8,
        investment: 0.3,
        stability: 0.9,
        growth: 0.4,
    },
    EconomicEntry {
        category: Category::Management,
        risk: 0.7,
        investment: 0.6,
        stability: 0.8,
        growth: 0.7,
    },
];

/// Final-score blend across the three signal sources.
#[derive(Debug, Clone, Copy)]
pub struct CombinerWeights {
    pub personality: f64,
    pub economic: f64,
    pub age: f64,
}

impl CombinerWeights {
    pub fn sum(&self) -> f64 {
        self.personality + self.economic + self.age
    }
}

pub const COMBINER_WEIGHTS: CombinerWeights = CombinerWeights {
    personality: 0.5,
    economic: 0.3,
    age: 0.2,
};

/// Bonus for categories strong in both tracks. The personality threshold
/// reads the 0-100 rescaled value while the economic threshold reads the
/// raw composite; the two sides are on different scales on purpose.
pub const DUAL_TRACK_BONUS: f64 = 5.0;
pub const BONUS_PERSONALITY_THRESHOLD: f64 = 70.0;
pub const BONUS_ECONOMIC_THRESHOLD: f64 = 3.5;

/// Age suitability curve: piecewise-linear through `points` (age,
/// factor), held at the end values outside the covered range, then
/// clamped to [min, max].
#[derive(Debug, Clone, Copy)]
pub struct AgeCurve {
    pub category: Category,
    pub points: &'static [(f64, f64)],
    pub min: f64,
    pub max: f64,
}

pub const AGE_CURVES: [AgeCurve; 5] = [
    // Analyst: rises steadily toward late career.
    AgeCurve {
        category: Category::Analyst,
        points: &[(15.0, 0.50), (65.0, 1.00)],
        min: 0.50,
        max: 1.00,
    },
    // Marketing: peaks mid-career.
    AgeCurve {
        category: Category::Marketing,
        points: &[(15.0, 0.50), (30.0, 0.90), (40.0, 0.90), (65.0, 0.50)],
        min: 0.40,
        max: 0.90,
    },
    // Creative: favors youth, tapers to a floor.
    AgeCurve {
        category: Category::Creative,
        points: &[(15.0, 0.95), (25.0, 0.95), (60.0, 0.35), (65.0, 0.35)],
        min: 0.35,
        max: 0.95,
    },
    // Social: flat across the working range.
    AgeCurve {
        category: Category::Social,
        points: &[(15.0, 0.70), (65.0, 0.70)],
        min: 0.60,
        max: 0.80,
    },
    // Management: requires experience, rises later.
    AgeCurve {
        category: Category::Management,
        points: &[(15.0, 0.30), (25.0, 0.30), (50.0, 0.95), (65.0, 0.95)],
        min: 0.30,
        max: 0.95,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combiner_weights_sum_to_one() {
        assert!((COMBINER_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn personality_coefficients_stay_in_unit_range() {
        for entry in &PERSONALITY_COEFFICIENTS {
            for coef in entry.coefficients {
                assert!(
                    (0.0..=1.0).contains(&coef.weight),
                    "{} has out-of-range coefficient for {}",
                    entry.id,
                    coef.category
                );
            }
        }
    }

    #[test]
    fn economic_table_covers_every_category_once() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(ECONOMIC_WEIGHTS[i].category, *category);
        }
    }

    #[test]
    fn age_curves_cover_every_category_with_sane_points() {
        for (i, category) in Category::ALL.iter().enumerate() {
            let curve = &AGE_CURVES[i];
            assert_eq!(curve.category, *category);
            assert!(curve.points.len() >= 2);
            assert!(curve.min <= curve.max);
            for window in curve.points.windows(2) {
                assert!(window[0].0 < window[1].0, "{} ages must increase", category);
            }
            for (_, factor) in curve.points {
                assert!((curve.min..=curve.max).contains(factor));
            }
        }
    }
}
