//! Demo dataset written by `PersistentStore::initialize`.

use chrono::{DateTime, NaiveDate, Utc};

use domain::{
    avatar_url, AccessLevel, Company, CompanyMetrics, Document, DocumentCategory, DocumentType,
    Investor, Message, Notification, NotificationType, PerformancePoint, PortfolioHolding, User,
    UserRole, UserStatus,
};

/// The six seeded collections.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub investors: Vec<Investor>,
    pub companies: Vec<Company>,
    pub documents: Vec<Document>,
    pub notifications: Vec<Notification>,
    pub performance: Vec<PerformancePoint>,
    pub messages: Vec<Message>,
}

impl SeedData {
    /// Every collection empty
    pub fn empty() -> Self {
        Self {
            investors: Vec::new(),
            companies: Vec::new(),
            documents: Vec::new(),
            notifications: Vec::new(),
            performance: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// The fictional firm's demo data
    pub fn demo() -> Self {
        Self {
            investors: investors(),
            companies: companies(),
            documents: documents(),
            notifications: notifications(),
            performance: performance(),
            messages: messages(),
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::demo()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    company: Option<&str>,
    phone: Option<&str>,
    joined_at: DateTime<Utc>,
    status: UserStatus,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        phone: phone.map(str::to_string),
        company: company.map(str::to_string),
        avatar: Some(avatar_url(name)),
        joined_at,
        last_login: None,
        status,
    }
}

fn holding(
    company_id: &str,
    company_name: &str,
    shares: u64,
    invested: f64,
    current_value: f64,
    acquired_at: DateTime<Utc>,
) -> PortfolioHolding {
    PortfolioHolding {
        company_id: company_id.to_string(),
        company_name: company_name.to_string(),
        shares,
        invested,
        current_value,
        acquired_at,
    }
}

fn investors() -> Vec<Investor> {
    let mut sarah = Investor::from_user(user(
        "inv-001",
        "Sarah Mitchell",
        "sarah.mitchell@example.com",
        UserRole::Investor,
        Some("Mitchell Family Office"),
        Some("+1 (415) 555-0142"),
        at(2021, 3, 15, 10),
        UserStatus::Active,
    ));
    sarah.user.last_login = Some(at(2024, 6, 10, 8));
    sarah.total_invested = 2_500_000.0;
    sarah.current_value = 3_420_000.0;
    sarah.total_return = 36.8;
    sarah.portfolio = vec![
        holding("cmp-001", "NovaGrid Energy", 120_000, 1_500_000.0, 2_160_000.0, at(2021, 4, 1, 9)),
        holding("cmp-004", "Quantia Analytics", 40_000, 1_000_000.0, 1_260_000.0, at(2022, 2, 14, 9)),
    ];

    let mut james = Investor::from_user(user(
        "inv-002",
        "James Chen",
        "james.chen@example.com",
        UserRole::Investor,
        Some("Chen Capital Partners"),
        Some("+1 (212) 555-0187"),
        at(2020, 11, 2, 14),
        UserStatus::Active,
    ));
    james.user.last_login = Some(at(2024, 6, 8, 17));
    james.total_invested = 5_000_000.0;
    james.current_value = 6_150_000.0;
    james.total_return = 23.0;
    james.portfolio = vec![holding(
        "cmp-002",
        "Helix Biotherapeutics",
        250_000,
        5_000_000.0,
        6_150_000.0,
        at(2020, 12, 1, 9),
    )];

    let elena = Investor::from_user(user(
        "inv-003",
        "Elena Rodriguez",
        "elena.rodriguez@example.com",
        UserRole::Investor,
        None,
        None,
        at(2024, 1, 20, 11),
        UserStatus::Pending,
    ));

    let admin = Investor::from_user(user(
        "adm-001",
        "Portal Admin",
        "admin@example.com",
        UserRole::Admin,
        Some("Meridian Ventures"),
        None,
        at(2019, 6, 1, 9),
        UserStatus::Active,
    ));

    vec![sarah, james, elena, admin]
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    sector: &str,
    description: &str,
    founded: u16,
    valuation: f64,
    revenue: f64,
    employees: u32,
    stage: &str,
    metrics: CompanyMetrics,
) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        description: description.to_string(),
        logo: None,
        founded,
        valuation,
        revenue,
        employees,
        stage: stage.to_string(),
        metrics,
    }
}

fn metrics(growth: f64, margin: f64, customers: u64, market_share: f64) -> CompanyMetrics {
    CompanyMetrics {
        growth,
        margin,
        customers,
        market_share,
    }
}

fn companies() -> Vec<Company> {
    vec![
        company(
            "cmp-001",
            "NovaGrid Energy",
            "Clean Energy",
            "Grid-scale battery storage and demand-response software.",
            2017,
            420_000_000.0,
            58_000_000.0,
            210,
            "Series C",
            metrics(84.0, 41.5, 37, 6.2),
        ),
        company(
            "cmp-002",
            "Helix Biotherapeutics",
            "Healthcare",
            "Gene-editing therapies for rare metabolic disorders.",
            2015,
            960_000_000.0,
            12_500_000.0,
            340,
            "Series D",
            metrics(31.0, 12.0, 9, 2.4),
        ),
        company(
            "cmp-003",
            "Lumen Robotics",
            "Industrial Automation",
            "Vision-guided picking robots for mid-size warehouses.",
            2020,
            95_000_000.0,
            7_800_000.0,
            64,
            "Series A",
            metrics(152.0, 28.0, 118, 0.9),
        ),
        company(
            "cmp-004",
            "Quantia Analytics",
            "Fintech",
            "Risk analytics platform for regional lenders.",
            2016,
            610_000_000.0,
            74_000_000.0,
            395,
            "Growth",
            metrics(46.0, 67.0, 1_240, 11.8),
        ),
        company(
            "cmp-005",
            "Terrace Foods",
            "Consumer",
            "Vertical-farm produce sold direct to grocery chains.",
            2021,
            38_000_000.0,
            4_100_000.0,
            52,
            "Seed",
            metrics(210.0, 18.5, 22, 0.3),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    name: &str,
    doc_type: DocumentType,
    category: DocumentCategory,
    access_level: AccessLevel,
    size: &str,
    uploaded_at: DateTime<Utc>,
    downloads: u32,
) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        doc_type,
        category,
        access_level,
        size: size.to_string(),
        uploaded_at,
        downloads,
        company_id: None,
    }
}

fn documents() -> Vec<Document> {
    let mut board_deck = document(
        "doc-006",
        "NovaGrid Board Deck - May 2024",
        DocumentType::Pdf,
        DocumentCategory::Report,
        AccessLevel::Admin,
        "8.7 MB",
        at(2024, 5, 28, 16),
        3,
    );
    board_deck.company_id = Some("cmp-001".to_string());

    vec![
        document(
            "doc-001",
            "Q1 2024 Portfolio Report",
            DocumentType::Pdf,
            DocumentCategory::Report,
            AccessLevel::Investors,
            "2.4 MB",
            at(2024, 4, 15, 9),
            128,
        ),
        document(
            "doc-002",
            "2023 Audited Financial Statements",
            DocumentType::Excel,
            DocumentCategory::Financial,
            AccessLevel::Investors,
            "1.1 MB",
            at(2024, 3, 29, 12),
            86,
        ),
        document(
            "doc-003",
            "Limited Partnership Agreement",
            DocumentType::Doc,
            DocumentCategory::Legal,
            AccessLevel::Investors,
            "640 KB",
            at(2021, 1, 10, 9),
            212,
        ),
        document(
            "doc-004",
            "2023 Schedule K-1 Package",
            DocumentType::Pdf,
            DocumentCategory::Tax,
            AccessLevel::Investors,
            "3.2 MB",
            at(2024, 3, 12, 10),
            154,
        ),
        document(
            "doc-005",
            "KYC Verification Checklist",
            DocumentType::Doc,
            DocumentCategory::Compliance,
            AccessLevel::All,
            "120 KB",
            at(2023, 9, 1, 9),
            341,
        ),
        board_deck,
        document(
            "doc-007",
            "Fund Overview Brochure",
            DocumentType::Image,
            DocumentCategory::Report,
            AccessLevel::All,
            "5.5 MB",
            at(2023, 11, 20, 15),
            502,
        ),
    ]
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    kind: NotificationType,
    read: bool,
    created_at: DateTime<Utc>,
    action_url: Option<&str>,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        read,
        created_at,
        action_url: action_url.map(str::to_string),
    }
}

fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "ntf-001",
            "Q1 report available",
            "The Q1 2024 portfolio report has been published.",
            NotificationType::Info,
            false,
            at(2024, 4, 15, 9),
            Some("/portal/documents"),
        ),
        notification(
            "ntf-002",
            "Capital call notice",
            "A capital call of 5% of commitment is due on July 1.",
            NotificationType::Warning,
            false,
            at(2024, 6, 3, 11),
            Some("/portal/messages"),
        ),
        notification(
            "ntf-003",
            "K-1 documents ready",
            "Your 2023 Schedule K-1 package is ready to download.",
            NotificationType::Success,
            true,
            at(2024, 3, 12, 10),
            Some("/portal/tax"),
        ),
        notification(
            "ntf-004",
            "KYC renewal required",
            "Please re-verify your identity documents before August 31.",
            NotificationType::Error,
            false,
            at(2024, 6, 5, 8),
            Some("/portal/compliance"),
        ),
        notification(
            "ntf-005",
            "Distribution processed",
            "A distribution from the Quantia secondary sale has been wired.",
            NotificationType::Success,
            true,
            at(2024, 5, 20, 14),
            None,
        ),
    ]
}

fn performance() -> Vec<PerformancePoint> {
    const SERIES: &[(&str, f64, f64, f64)] = &[
        ("Jan 2024", 2_610_000.0, 2_200_000.0, 2_580_000.0),
        ("Feb 2024", 2_680_000.0, 2_200_000.0, 2_620_000.0),
        ("Mar 2024", 2_755_000.0, 2_300_000.0, 2_640_000.0),
        ("Apr 2024", 2_720_000.0, 2_300_000.0, 2_610_000.0),
        ("May 2024", 2_840_000.0, 2_300_000.0, 2_690_000.0),
        ("Jun 2024", 2_910_000.0, 2_400_000.0, 2_720_000.0),
        ("Jul 2024", 3_010_000.0, 2_400_000.0, 2_760_000.0),
        ("Aug 2024", 2_980_000.0, 2_400_000.0, 2_740_000.0),
        ("Sep 2024", 3_120_000.0, 2_500_000.0, 2_800_000.0),
        ("Oct 2024", 3_205_000.0, 2_500_000.0, 2_830_000.0),
        ("Nov 2024", 3_330_000.0, 2_500_000.0, 2_890_000.0),
        ("Dec 2024", 3_420_000.0, 2_500_000.0, 2_930_000.0),
    ];

    SERIES
        .iter()
        .map(|&(date, portfolio_value, invested, benchmark)| PerformancePoint {
            date: date.to_string(),
            portfolio_value,
            invested,
            benchmark,
        })
        .collect()
}

fn message(
    id: &str,
    sender: (&str, &str),
    recipient: (&str, &str),
    subject: &str,
    content: &str,
    sent_at: DateTime<Utc>,
    read: bool,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender.0.to_string(),
        sender_name: sender.1.to_string(),
        sender_avatar: Some(avatar_url(sender.1)),
        recipient_id: recipient.0.to_string(),
        recipient_name: recipient.1.to_string(),
        subject: subject.to_string(),
        content: content.to_string(),
        sent_at,
        read,
    }
}

fn messages() -> Vec<Message> {
    let relations = ("adm-001", "Portal Admin");
    let sarah = ("inv-001", "Sarah Mitchell");
    let james = ("inv-002", "James Chen");

    vec![
        message(
            "msg-001",
            relations,
            sarah,
            "Welcome to the investor portal",
            "Your account is set up. Reports, tax documents and notices will appear here.",
            at(2021, 3, 15, 12),
            true,
        ),
        message(
            "msg-002",
            relations,
            sarah,
            "Capital call schedule",
            "Attached is the schedule for the upcoming capital call. Wire details are unchanged.",
            at(2024, 6, 3, 11),
            false,
        ),
        message(
            "msg-003",
            sarah,
            relations,
            "Question about NovaGrid",
            "Could you share the latest board deck for NovaGrid ahead of the AGM?",
            at(2024, 6, 4, 9),
            false,
        ),
        message(
            "msg-004",
            relations,
            james,
            "Helix follow-on round",
            "Helix is raising a follow-on round. Let us know if you want to exercise pro-rata rights.",
            at(2024, 5, 30, 15),
            false,
        ),
    ]
}
