use std::collections::HashMap;

use serde::Deserialize;

use crate::Respondent;

/// HTTP request body for a scoring run. Respondent data rides along and
/// is upserted before the engine runs; `quiz_type` defaults to
/// comprehensive when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct RunQuizRequest {
    pub nik: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub age: u32,
    pub answers: HashMap<String, f64>,
    #[serde(default)]
    pub quiz_type: Option<String>,
}

impl RunQuizRequest {
    pub fn respondent(&self) -> Respondent {
        Respondent {
            nik: self.nik.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let request: RunQuizRequest = serde_json::from_str(
            r#"{"nik":"327","name":"Sari","age":29,"answers":{"q1":4}}"#,
        )
        .unwrap();

        assert_eq!(request.address, "");
        assert_eq!(request.quiz_type, None);
        assert_eq!(request.answers["q1"], 4.0);
        assert_eq!(request.respondent().nik, "327");
    }
}
