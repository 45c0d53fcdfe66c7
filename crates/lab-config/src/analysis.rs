//! Statistics report configuration.

use serde::{Deserialize, Serialize};

const fn default_correlations() -> bool {
    true
}

const fn default_min_correlation_pairs() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Whether statistics reports include pairwise correlations of numeric questions.
    #[serde(default = "default_correlations")]
    pub correlations: bool,

    /// Paired numeric answers required before a correlation is reported.
    #[serde(default = "default_min_correlation_pairs")]
    pub min_correlation_pairs: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            correlations: default_correlations(),
            min_correlation_pairs: default_min_correlation_pairs(),
        }
    }
}
