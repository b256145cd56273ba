//! Portfolio performance series.

use serde::{Deserialize, Serialize};

/// One chart point: a period label with three series values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    /// Period label, e.g. "Mar 2024"
    pub date: String,
    pub portfolio_value: f64,
    pub invested: f64,
    pub benchmark: f64,
}
