pub mod error;
pub mod results;
pub mod scale;
pub mod variables;

pub use error::{Result, SurveyError};
pub use results::{CorrelationEntry, CorrelationSet, OlsSummary, OlsTerm};
pub use scale::{
    OrdinalScale, ethnic_identity_scale, life_satisfaction_scale, mental_health_scale,
};
pub use variables::{AnalysisVar, CORRELATION_PAIRS, pair_label};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_set_lookup() {
        let set = CorrelationSet {
            entries: vec![
                CorrelationEntry {
                    label: "Discrimination & Mental Health".to_string(),
                    coefficient: -0.18,
                },
                CorrelationEntry {
                    label: "Ethnic Identity & Life Satisfaction".to_string(),
                    coefficient: 0.07,
                },
            ],
        };
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Discrimination & Mental Health"), Some(-0.18));
        assert_eq!(set.get("Unknown Pair"), None);
    }

    #[test]
    fn pair_labels_follow_reporting_order() {
        let labels: Vec<String> = CORRELATION_PAIRS
            .iter()
            .map(|(left, right)| pair_label(*left, *right))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Discrimination & Mental Health",
                "Discrimination & Life Satisfaction",
                "Ethnic Identity & Life Satisfaction",
                "Ethnic Identity & Mental Health",
            ]
        );
    }

    #[test]
    fn summary_serializes() {
        let summary = OlsSummary {
            dependent: "Mental_Health".to_string(),
            nobs: 120,
            df_resid: 117,
            r_squared: 0.21,
            adj_r_squared: 0.2,
            f_statistic: 15.5,
            f_pvalue: 0.0001,
            residual_sum: 1.2e-12,
            fitted_at: "2026-08-06 10:00:00".to_string(),
            terms: vec![OlsTerm {
                name: "const".to_string(),
                estimate: 3.9,
                std_error: 0.2,
                t_value: 19.5,
                p_value: 0.0,
            }],
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: OlsSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.dependent, "Mental_Health");
        assert_eq!(round.terms.len(), 1);
    }
}
