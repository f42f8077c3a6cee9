pub mod api;
pub mod category;
pub mod logging;
pub mod questions;
pub mod scoring;
pub mod store;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// A registered quiz respondent, keyed by the national id number (nik).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub nik: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub age: u32,
}

/// Which question banks run for a scoring pass. Comprehensive runs both
/// tracks and is the default.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuizType {
    Personality,
    Economic,
    #[default]
    Comprehensive,
}
