//! The four analysis variables and their fixed pairings.

use serde::{Deserialize, Serialize};

use crate::scale::{
    OrdinalScale, ethnic_identity_scale, life_satisfaction_scale, mental_health_scale,
};

/// One of the four derived variables consumed by the analysis stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisVar {
    LifeSatisfaction,
    MentalHealth,
    EthnicIdentity,
    Discrimination,
}

impl AnalysisVar {
    /// All four variables in canonical column order.
    pub const ALL: [AnalysisVar; 4] = [
        AnalysisVar::LifeSatisfaction,
        AnalysisVar::MentalHealth,
        AnalysisVar::EthnicIdentity,
        AnalysisVar::Discrimination,
    ];

    /// Canonical column name in the cleaned analysis frame.
    pub fn canonical_name(self) -> &'static str {
        match self {
            AnalysisVar::LifeSatisfaction => "Life_Satisfaction",
            AnalysisVar::MentalHealth => "Mental_Health",
            AnalysisVar::EthnicIdentity => "Ethnic_Identity",
            AnalysisVar::Discrimination => "Discrimination",
        }
    }

    /// Header of the source column this variable is derived from.
    ///
    /// Headers are matched after ingest normalization, so stray whitespace
    /// in the raw file (the survey export writes `"Discrimination "`) does
    /// not need to be reproduced here.
    pub fn source_column(self) -> &'static str {
        match self {
            AnalysisVar::LifeSatisfaction => "Satisfied With Life 1",
            AnalysisVar::MentalHealth => "Present Mental Health",
            AnalysisVar::EthnicIdentity => "Identify Ethnically",
            AnalysisVar::Discrimination => "Discrimination",
        }
    }

    /// Human-readable label used in reports and chart annotations.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisVar::LifeSatisfaction => "Life Satisfaction",
            AnalysisVar::MentalHealth => "Mental Health",
            AnalysisVar::EthnicIdentity => "Ethnic Identity",
            AnalysisVar::Discrimination => "Discrimination",
        }
    }

    /// The ordinal recoding scale, or `None` for the already-numeric
    /// discrimination score.
    pub fn scale(self) -> Option<OrdinalScale> {
        match self {
            AnalysisVar::LifeSatisfaction => Some(life_satisfaction_scale()),
            AnalysisVar::MentalHealth => Some(mental_health_scale()),
            AnalysisVar::EthnicIdentity => Some(ethnic_identity_scale()),
            AnalysisVar::Discrimination => None,
        }
    }
}

/// The four correlation pairs, in fixed reporting order.
pub const CORRELATION_PAIRS: [(AnalysisVar, AnalysisVar); 4] = [
    (AnalysisVar::Discrimination, AnalysisVar::MentalHealth),
    (AnalysisVar::Discrimination, AnalysisVar::LifeSatisfaction),
    (AnalysisVar::EthnicIdentity, AnalysisVar::LifeSatisfaction),
    (AnalysisVar::EthnicIdentity, AnalysisVar::MentalHealth),
];

/// Display label for a correlation pair, e.g. `"Discrimination & Mental Health"`.
pub fn pair_label(left: AnalysisVar, right: AnalysisVar) -> String {
    format!("{} & {}", left.label(), right.label())
}
