use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reporting window selection. Presets resolve relative to `now`; the
/// custom variant carries explicit bounds. All windows are inclusive on
/// both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportPeriod {
    LastDay,
    LastWeek,
    LastMonth,
    FullHistory,
    Custom {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl ReportPeriod {
    /// Resolve to a concrete `[from, to]` window
    pub fn window(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            ReportPeriod::LastDay => (now - Duration::days(1), now),
            ReportPeriod::LastWeek => (now - Duration::days(7), now),
            ReportPeriod::LastMonth => (now - Duration::days(30), now),
            ReportPeriod::FullHistory => (DateTime::<Utc>::MIN_UTC, now),
            ReportPeriod::Custom { from, to } => (*from, *to),
        }
    }
}

/// One entry of a popularity ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCount {
    pub name: String,
    pub count: u64,
}

/// Orders of one size within the window, with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeShare {
    pub size: String,
    pub count: u64,
    /// Percentage of the window's total order count
    #[serde(rename = "sharePct")]
    pub share_pct: f64,
}

/// Orders delivered on one calendar day (day the order was taken)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub day: NaiveDate,
    pub count: u64,
}

/// Aggregated sales statistics for a time window.
///
/// Revenue is valued at report time with current catalog prices, so the
/// same window can yield different totals after a catalog edit. Cancelled
/// orders are excluded from every aggregate, not just revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,

    #[serde(rename = "totalCount")]
    pub total_count: u64,

    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,

    /// Top 3 flavors by count, ties broken by first appearance
    #[serde(rename = "topFlavors")]
    pub top_flavors: Vec<RankedCount>,

    /// Top 3 add-ons by count, ties broken by first appearance
    #[serde(rename = "topAddOns")]
    pub top_add_ons: Vec<RankedCount>,

    /// Every size seen in the window, by count descending
    pub sizes: Vec<SizeShare>,

    /// Counts per calendar day, ascending
    #[serde(rename = "perDay")]
    pub per_day: Vec<DailySales>,
}
