//! Derived read models: the filtering and aggregation portal pages do.

use serde::Serialize;

use domain::{Company, Document, DocumentCategory, Message, PerformancePoint, UserRole};

/// Headline figures of the performance chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Label of the latest point
    pub period: String,
    pub latest_value: f64,
    pub invested: f64,
    /// Latest value minus capital invested
    pub gain: f64,
    /// Gain relative to capital invested, percent
    pub return_pct: f64,
    /// Portfolio value change across the series, percent
    pub period_return_pct: f64,
    /// Benchmark change across the series, percent
    pub benchmark_return_pct: f64,
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

/// Summarize a performance series; `None` when it is empty.
pub fn performance_summary(points: &[PerformancePoint]) -> Option<PerformanceSummary> {
    let first = points.first()?;
    let latest = points.last()?;
    let gain = latest.portfolio_value - latest.invested;

    Some(PerformanceSummary {
        period: latest.date.clone(),
        latest_value: latest.portfolio_value,
        invested: latest.invested,
        gain,
        return_pct: if latest.invested == 0.0 {
            0.0
        } else {
            gain / latest.invested * 100.0
        },
        period_return_pct: percent_change(first.portfolio_value, latest.portfolio_value),
        benchmark_return_pct: percent_change(first.benchmark, latest.benchmark),
    })
}

/// Documents whose access level admits `role`
pub fn documents_for_role(documents: &[Document], role: UserRole) -> Vec<Document> {
    documents
        .iter()
        .filter(|d| d.access_level.permits(role))
        .cloned()
        .collect()
}

pub fn documents_in_category(documents: &[Document], category: DocumentCategory) -> Vec<Document> {
    documents
        .iter()
        .filter(|d| d.category == category)
        .cloned()
        .collect()
}

/// Companies ordered by valuation, largest first
pub fn companies_by_valuation(companies: &[Company]) -> Vec<Company> {
    let mut sorted = companies.to_vec();
    sorted.sort_by(|a, b| b.valuation.total_cmp(&a.valuation));
    sorted
}

/// Messages addressed to `user_id`, newest first
pub fn inbox(messages: &[Message], user_id: &str) -> Vec<Message> {
    let mut received: Vec<Message> = messages
        .iter()
        .filter(|m| m.is_addressed_to(user_id))
        .cloned()
        .collect();
    received.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
    received
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_service_lib::SeedData;

    fn point(date: &str, portfolio_value: f64, invested: f64, benchmark: f64) -> PerformancePoint {
        PerformancePoint {
            date: date.to_string(),
            portfolio_value,
            invested,
            benchmark,
        }
    }

    #[test]
    fn test_performance_summary() {
        let points = vec![
            point("Jan", 100.0, 80.0, 50.0),
            point("Feb", 150.0, 100.0, 55.0),
        ];
        let summary = performance_summary(&points).unwrap();

        assert_eq!(summary.period, "Feb");
        assert_eq!(summary.gain, 50.0);
        assert_eq!(summary.return_pct, 50.0);
        assert_eq!(summary.period_return_pct, 50.0);
        assert!((summary.benchmark_return_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_performance_summary_edge_cases() {
        assert!(performance_summary(&[]).is_none());

        let summary = performance_summary(&[point("Jan", 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(summary.return_pct, 0.0);
        assert_eq!(summary.benchmark_return_pct, 0.0);
    }

    #[test]
    fn test_documents_for_role() {
        let documents = SeedData::demo().documents;
        let investor = documents_for_role(&documents, UserRole::Investor);
        let admin = documents_for_role(&documents, UserRole::Admin);

        assert_eq!(admin.len(), documents.len());
        assert_eq!(investor.len(), documents.len() - 1);
        assert!(investor.iter().all(|d| d.id != "doc-006"));
    }

    #[test]
    fn test_companies_by_valuation() {
        let sorted = companies_by_valuation(&SeedData::demo().companies);
        assert_eq!(sorted[0].name, "Helix Biotherapeutics");
        assert!(sorted.windows(2).all(|w| w[0].valuation >= w[1].valuation));
    }

    #[test]
    fn test_inbox_is_newest_first() {
        let messages = SeedData::demo().messages;
        let received = inbox(&messages, "inv-001");

        assert_eq!(received.len(), 2);
        assert_eq!(received[0].id, "msg-002");
        assert!(inbox(&messages, "nobody").is_empty());
    }
}
