use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CSV export of respondents joined with their latest result. Result
/// columns stay empty for respondents who have not taken the quiz yet.
pub async fn export_csv(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<(HeaderMap, String), ApiError> {
    let respondents = state.respondents.list()?;

    let mut body = String::from(
        "nik,name,address,age,category,percentage,confidence,quiz_type,analyzed_at\n",
    );
    for respondent in respondents {
        let result = state.results.latest(&respondent.nik).ok();

        let (category, percentage, confidence, quiz_type, analyzed_at) = match &result {
            Some(result) => (
                result.career.category.as_ref().to_string(),
                format!("{:.1}", result.percentage),
                result.confidence_level.as_ref().to_string(),
                result.quiz_type.as_ref().to_string(),
                result.analyzed_at.to_rfc3339(),
            ),
            None => Default::default(),
        };

        body.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            csv_field(&respondent.nik),
            csv_field(&respondent.name),
            csv_field(&respondent.address),
            respondent.age,
            category,
            percentage,
            confidence,
            quiz_type,
            analyzed_at,
        ));
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"ecoquiz_export.csv\""),
    );

    Ok((headers, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_containing_separators() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
