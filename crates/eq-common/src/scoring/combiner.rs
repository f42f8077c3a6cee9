use crate::category::Category;
use crate::scoring::engine::AnalysisError;
use crate::scoring::weights::{
    AGE_CURVES, BONUS_ECONOMIC_THRESHOLD, BONUS_PERSONALITY_THRESHOLD, COMBINER_WEIGHTS,
    DUAL_TRACK_BONUS,
};
use crate::scoring::ScoreVector;

/// Age suitability factor in [0,1]: linear interpolation through the
/// category's control points, held at the end values, then clamped.
pub fn age_factor(category: Category, age: u32) -> f64 {
    let curve = &AGE_CURVES[category as usize];
    let age = age as f64;

    let first = curve.points[0];
    let last = curve.points[curve.points.len() - 1];

    let raw = if age <= first.0 {
        first.1
    } else if age >= last.0 {
        last.1
    } else {
        let mut value = last.1;
        for window in curve.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if age <= x1 {
                value = y0 + (y1 - y0) * (age - x0) / (x1 - x0);
                break;
            }
        }
        value
    };

    raw.clamp(curve.min, curve.max)
}

fn track_denominator(vector: &ScoreVector) -> f64 {
    let max = vector.values().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Merge the personality vector, economic vector, and age factor into
/// one final score per category (0.5 / 0.3 / 0.2 blend), with a bonus
/// for categories strong in both tracks, clamped to [0, 100].
///
/// A track whose vector is empty contributes zero to every category.
pub fn combine(
    personality: &ScoreVector,
    economic: &ScoreVector,
    age: u32,
) -> Result<ScoreVector, AnalysisError> {
    let personality_denominator = track_denominator(personality);
    let economic_denominator = track_denominator(economic);

    let mut final_scores = ScoreVector::new();
    for category in Category::ALL {
        let p = personality.get(&category).copied().unwrap_or(0.0);
        let e = economic.get(&category).copied().unwrap_or(0.0);

        let mut score = COMBINER_WEIGHTS.personality * (p / personality_denominator) * 100.0
            + COMBINER_WEIGHTS.age * age_factor(category, age) * 100.0;
        if !economic.is_empty() {
            score += COMBINER_WEIGHTS.economic * (e / economic_denominator) * 100.0;
        }

        // The thresholds read the rescaled (0-100) personality value
        // against the raw economic composite; the scales differ.
        if p > BONUS_PERSONALITY_THRESHOLD && e > BONUS_ECONOMIC_THRESHOLD {
            score += DUAL_TRACK_BONUS;
        }

        final_scores.insert(category, score.clamp(0.0, 100.0));
    }

    // Unreachable given the age-factor floors, but a zeroed-out vector
    // would mean the coefficient tables are broken.
    if final_scores.values().all(|score| *score <= 0.0) {
        return Err(AnalysisError::InvalidAnalysisResult);
    }

    Ok(final_scores)
}
