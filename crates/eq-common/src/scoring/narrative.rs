use crate::category::Category;

const ADVISORY_EXPLORE_THRESHOLD: f64 = 70.0;
const ADVISORY_RETAKE_THRESHOLD: f64 = 60.0;

fn personality_sentence(score: f64) -> &'static str {
    if score > 85.0 {
        "Your personality profile is a very strong match for this field."
    } else if score > 70.0 {
        "Your personality profile is a good fit for this field."
    } else {
        "Your personality shows potential for this field that you can develop."
    }
}

fn economic_sentence(score: f64) -> &'static str {
    if score > 4.0 {
        "Your economic preferences are very well suited to this path."
    } else if score > 3.0 {
        "Your economic preferences are a reasonable fit for this path."
    } else {
        "You may need to adjust your economic expectations for this path."
    }
}

/// Base description plus one personality-tier and one economic-tier
/// sentence. The economic match defaults to 3 when that track is absent.
pub fn narrative_for(
    category: Category,
    personality_match: f64,
    economic_match: Option<f64>,
) -> String {
    let profile = category.profile();
    let economic_match = economic_match.unwrap_or(3.0);

    format!(
        "{} {} {}",
        profile.description,
        personality_sentence(personality_match),
        economic_sentence(economic_match),
    )
}

/// Zero to two advisory strings, keyed off the pre-clamp score so the
/// lower tier stays reachable below the reporting floor.
pub fn advisories_for(unclamped_score: f64) -> Vec<String> {
    let mut advisories = Vec::new();
    if unclamped_score < ADVISORY_EXPLORE_THRESHOLD {
        advisories.push("Consider exploring multiple career categories before committing.".into());
    }
    if unclamped_score < ADVISORY_RETAKE_THRESHOLD {
        advisories.push("Consider taking the comprehensive quiz for a more complete picture.".into());
    }
    advisories
}
