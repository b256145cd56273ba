//! Read-only pages: documents, companies, dashboard.

use serde::Serialize;

use common::AppResult;
use domain::{Company, Document, DocumentCategory, PortfolioHolding};
use portal_service_lib::views::documents_in_category;
use portal_service_lib::{PerformanceSummary, PortalDataService};

use super::Portal;

pub fn documents(portal: &Portal, category: Option<DocumentCategory>) -> AppResult<()> {
    let me = portal.signed_in()?;
    let visible = portal.data.documents_for_role(me.user.role);
    let documents = match category {
        Some(category) => documents_in_category(&visible, category),
        None => visible,
    };

    portal.emit(&documents, |list| print_documents(list))
}

pub fn companies(portal: &Portal) -> AppResult<()> {
    portal.signed_in()?;
    let companies = portal.data.companies_by_valuation();
    portal.emit(&companies, |list| print_companies(list))
}

/// Overview shown on the portal landing page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    name: String,
    total_invested: f64,
    current_value: f64,
    total_return: f64,
    holdings: Vec<PortfolioHolding>,
    unread_notifications: usize,
    unread_messages: usize,
    documents_available: usize,
    performance: Option<PerformanceSummary>,
}

pub async fn dashboard(portal: &Portal) -> AppResult<()> {
    let me = portal.signed_in()?;
    let data = &portal.data;

    let dashboard = Dashboard {
        name: me.name().to_string(),
        total_invested: me.total_invested,
        current_value: me.current_value,
        total_return: me.total_return,
        holdings: me.portfolio.clone(),
        unread_notifications: data.unread_count().await,
        unread_messages: data.unread_message_count(me.id()).await,
        documents_available: data.documents_for_role(me.user.role).len(),
        performance: data.performance_summary(),
    };

    portal.emit(&dashboard, print_dashboard)
}

fn money(amount: f64) -> String {
    if amount.abs() >= 1_000_000.0 {
        format!("${:.2}M", amount / 1_000_000.0)
    } else {
        format!("${:.0}", amount)
    }
}

fn print_documents(documents: &[Document]) {
    println!("{} document(s)", documents.len());
    for d in documents {
        println!(
            "  {}  {:<44} {:?}/{:?}  {}  {}",
            d.id,
            d.name,
            d.category,
            d.doc_type,
            d.size,
            d.uploaded_at.format("%Y-%m-%d")
        );
    }
}

fn print_companies(companies: &[Company]) {
    for c in companies {
        println!(
            "  {}  {:<24} {:<22} {:>10}  {}",
            c.id,
            c.name,
            c.sector,
            money(c.valuation),
            c.stage
        );
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("Welcome back, {}", dashboard.name);
    println!(
        "  Invested {}  Value {}  Return {}",
        money(dashboard.total_invested),
        money(dashboard.current_value),
        money(dashboard.total_return)
    );
    for h in &dashboard.holdings {
        println!(
            "    {:<24} {:>10} -> {:>10}",
            h.company_name,
            money(h.invested),
            money(h.current_value)
        );
    }
    println!(
        "  {} unread notification(s), {} unread message(s), {} document(s)",
        dashboard.unread_notifications, dashboard.unread_messages, dashboard.documents_available
    );
    if let Some(p) = &dashboard.performance {
        println!(
            "  {}: {} ({:+.1}% on invested, {:+.1}% over the year vs benchmark {:+.1}%)",
            p.period,
            money(p.latest_value),
            p.return_pct,
            p.period_return_pct,
            p.benchmark_return_pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(3_420_000.0), "$3.42M");
        assert_eq!(money(85_000.0), "$85000");
        assert_eq!(money(-1_500_000.0), "$-1.50M");
    }
}
