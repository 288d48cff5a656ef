//! Ordinal recoding scales.
//!
//! A scale is a closed, ordered list of `(label, value)` pairs. Recoding is
//! strict exact-match: any raw value outside the label set maps to missing,
//! never to an error and never to a fuzzy match.

use serde::{Deserialize, Serialize};

/// A fixed mapping from survey response labels to an integer ordinal scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalScale {
    /// Display name, e.g. "Life Satisfaction (7-point)".
    pub name: String,
    levels: Vec<(String, i64)>,
}

impl OrdinalScale {
    pub fn new(name: impl Into<String>, levels: &[(&str, i64)]) -> Self {
        Self {
            name: name.into(),
            levels: levels
                .iter()
                .map(|(label, value)| ((*label).to_string(), *value))
                .collect(),
        }
    }

    /// Recode a raw response. Exact label match only; unknown text
    /// (including case mismatches) is missing.
    pub fn recode(&self, raw: &str) -> Option<i64> {
        self.levels
            .iter()
            .find(|(label, _)| label == raw)
            .map(|(_, value)| *value)
    }

    /// The `(label, value)` pairs in scale order.
    pub fn levels(&self) -> &[(String, i64)] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn min_value(&self) -> Option<i64> {
        self.levels.iter().map(|(_, value)| *value).min()
    }

    pub fn max_value(&self) -> Option<i64> {
        self.levels.iter().map(|(_, value)| *value).max()
    }
}

/// 7-point agreement scale for the "Satisfied With Life 1" item.
pub fn life_satisfaction_scale() -> OrdinalScale {
    OrdinalScale::new(
        "Life Satisfaction (7-point)",
        &[
            ("Strongly disagree", 1),
            ("Disagree", 2),
            ("Slightly disagree", 3),
            ("Neither agree or disagree", 4),
            ("Slightly agree", 5),
            ("Agree", 6),
            ("Strongly agree", 7),
        ],
    )
}

/// 5-point self-rated scale for the "Present Mental Health" item.
pub fn mental_health_scale() -> OrdinalScale {
    OrdinalScale::new(
        "Mental Health (5-point)",
        &[
            ("Poor", 1),
            ("Fair", 2),
            ("Good", 3),
            ("Very Good", 4),
            ("Excellent", 5),
        ],
    )
}

/// 4-point closeness scale for the "Identify Ethnically" item.
pub fn ethnic_identity_scale() -> OrdinalScale {
    OrdinalScale::new(
        "Ethnic Identity (4-point)",
        &[
            ("Not at all", 1),
            ("Not very close", 2),
            ("Somewhat close", 3),
            ("Very close", 4),
        ],
    )
}
