//! Portfolio company entity.

use serde::{Deserialize, Serialize};

/// Operating metrics shown on the company detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    /// Year-over-year revenue growth, percent
    pub growth: f64,
    /// Gross margin, percent
    pub margin: f64,
    pub customers: u64,
    /// Share of the addressable market, percent
    pub market_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub founded: u16,
    pub valuation: f64,
    pub revenue: f64,
    pub employees: u32,
    pub stage: String,
    pub metrics: CompanyMetrics,
}
