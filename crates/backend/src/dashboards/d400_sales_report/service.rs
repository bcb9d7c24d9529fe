use crate::shared::state::AppState;
use chrono::{DateTime, NaiveDate, Utc};
use contracts::dashboards::d400_sales_report::{
    DailySales, RankedCount, ReportPeriod, SalesReport, SizeShare,
};
use contracts::domain::a001_menu_catalog::MenuCatalog;
use contracts::domain::a002_order::Order;
use contracts::enums::OrderStatus;
use std::collections::BTreeMap;

/// How many entries the popularity rankings keep
const TOP_N: usize = 3;

/// Get the sales report for a period, resolved against the current time
pub fn sales_report(state: &AppState, period: &ReportPeriod) -> SalesReport {
    let (from, to) = period.window(Utc::now());
    build_report(state.queue.history(), &state.catalog, from, to)
}

/// Aggregate the delivered history over an inclusive `[from, to]` window.
///
/// Cancelled orders are excluded from every statistic, not only revenue.
/// Revenue is valued at report time with the current catalog: an order
/// whose flavor or size has since left the menu contributes zero revenue
/// but still counts in every popularity ranking. Reports over the same
/// window are therefore not reproducible across catalog edits.
pub fn build_report(
    history: &[Order],
    catalog: &MenuCatalog,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> SalesReport {
    let mut total_count: u64 = 0;
    let mut total_revenue: f64 = 0.0;
    // Counters keep first-appearance order so that ranking ties break
    // deterministically under the stable sort below.
    let mut flavor_counts: Vec<(String, u64)> = Vec::new();
    let mut add_on_counts: Vec<(String, u64)> = Vec::new();
    let mut size_counts: Vec<(String, u64)> = Vec::new();
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for order in history {
        if order.status != OrderStatus::Delivered {
            continue;
        }
        if order.created_at < from || order.created_at > to {
            continue;
        }

        total_count += 1;
        total_revenue += catalog.order_value(order).unwrap_or(0.0);

        bump(&mut flavor_counts, &order.flavor);
        bump(&mut size_counts, &order.size);
        for add_on in order.add_ons.iter() {
            bump(&mut add_on_counts, add_on);
        }
        // Grouped by the day the order was taken, not the delivery day.
        *per_day.entry(order.created_at.date_naive()).or_insert(0) += 1;
    }

    SalesReport {
        from,
        to,
        total_count,
        total_revenue,
        top_flavors: top_ranked(flavor_counts),
        top_add_ons: top_ranked(add_on_counts),
        sizes: size_shares(size_counts, total_count),
        per_day: per_day
            .into_iter()
            .map(|(day, count)| DailySales { day, count })
            .collect(),
    }
}

fn bump(counts: &mut Vec<(String, u64)>, name: &str) {
    match counts.iter_mut().find(|(n, _)| n == name) {
        Some(entry) => entry.1 += 1,
        None => counts.push((name.to_string(), 1)),
    }
}

fn top_ranked(mut counts: Vec<(String, u64)>) -> Vec<RankedCount> {
    // sort_by is stable: equal counts keep first-appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_N)
        .map(|(name, count)| RankedCount { name, count })
        .collect()
}

fn size_shares(mut counts: Vec<(String, u64)>, total_count: u64) -> Vec<SizeShare> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(size, count)| SizeShare {
            size,
            count,
            share_pct: if total_count == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total_count as f64
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu_catalog::repository::seed_catalog;
    use chrono::TimeZone;
    use contracts::domain::a002_order::{AddOnSet, Customer, Order};

    fn delivered(
        number: u64,
        flavor: &str,
        size: &str,
        add_ons: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Order {
        let mut order = Order::new(
            number,
            Customer {
                name: "Fabio".into(),
                phone: "555-0106".into(),
            },
            flavor.into(),
            size.into(),
            AddOnSet::from_names(add_ons),
            String::new(),
            created_at,
        )
        .unwrap();
        order.status = OrderStatus::Delivered;
        order
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (at(1, 0), at(31, 23))
    }

    #[test]
    fn test_counts_revenue_and_ranking() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![
            delivered(1, "Margherita", "medium", vec!["Olives".into()], at(10, 12)),
            delivered(2, "Margherita", "large", vec![], at(10, 19)),
            delivered(3, "Calabresa", "medium", vec!["Olives".into(), "Bacon".into()], at(11, 12)),
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.total_count, 3);
        // 40+3 + 52 + 42+3+6
        assert_eq!(report.total_revenue, 146.0);

        assert_eq!(report.top_flavors.len(), 2);
        assert_eq!(report.top_flavors[0].name, "Margherita");
        assert_eq!(report.top_flavors[0].count, 2);
        assert_eq!(report.top_flavors[1].name, "Calabresa");

        assert_eq!(report.top_add_ons[0].name, "Olives");
        assert_eq!(report.top_add_ons[0].count, 2);
        assert_eq!(report.top_add_ons[1].name, "Bacon");
    }

    #[test]
    fn test_ties_break_by_first_appearance() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![
            delivered(1, "Napolitana", "small", vec![], at(5, 10)),
            delivered(2, "Four Cheese", "small", vec![], at(5, 11)),
            delivered(3, "Margherita", "small", vec![], at(5, 12)),
            delivered(4, "Four Cheese", "small", vec![], at(5, 13)),
            delivered(5, "Napolitana", "small", vec![], at(5, 14)),
            delivered(6, "Margherita", "small", vec![], at(5, 15)),
        ];

        let report = build_report(&history, &catalog, from, to);
        let names: Vec<&str> = report.top_flavors.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Napolitana", "Four Cheese", "Margherita"]);
    }

    #[test]
    fn test_top_rankings_keep_three() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![
            delivered(1, "Margherita", "small", vec![], at(5, 10)),
            delivered(2, "Calabresa", "small", vec![], at(5, 11)),
            delivered(3, "Bacon", "small", vec![], at(5, 12)),
            delivered(4, "Ham", "small", vec![], at(5, 13)),
        ];
        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.top_flavors.len(), 3);
    }

    #[test]
    fn test_cancelled_excluded_from_every_aggregate() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let mut cancelled = delivered(2, "Calabresa", "family", vec!["Bacon".into()], at(10, 13));
        cancelled.status = OrderStatus::Cancelled;
        let history = vec![
            delivered(1, "Margherita", "medium", vec![], at(10, 12)),
            cancelled,
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.total_count, 1);
        assert_eq!(report.total_revenue, 40.0);
        assert_eq!(report.top_flavors.len(), 1);
        assert!(report.top_add_ons.is_empty());
        assert_eq!(report.sizes.len(), 1);
        assert_eq!(report.per_day.len(), 1);
        assert_eq!(report.per_day[0].count, 1);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let catalog = seed_catalog();
        let from = at(10, 12);
        let to = at(20, 12);
        let history = vec![
            delivered(1, "Margherita", "small", vec![], from),
            delivered(2, "Margherita", "small", vec![], to),
            delivered(3, "Margherita", "small", vec![], at(10, 11)),
            delivered(4, "Margherita", "small", vec![], at(20, 13)),
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.total_count, 2);
    }

    #[test]
    fn test_per_day_groups_by_order_date() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![
            delivered(1, "Margherita", "small", vec![], at(10, 9)),
            delivered(2, "Calabresa", "small", vec![], at(10, 21)),
            delivered(3, "Margherita", "small", vec![], at(12, 12)),
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.per_day.len(), 2);
        assert_eq!(report.per_day[0].day, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(report.per_day[0].count, 2);
        assert_eq!(report.per_day[1].count, 1);
    }

    #[test]
    fn test_size_shares_sum_to_hundred() {
        let catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![
            delivered(1, "Margherita", "medium", vec![], at(5, 10)),
            delivered(2, "Calabresa", "medium", vec![], at(5, 11)),
            delivered(3, "Bacon", "family", vec![], at(5, 12)),
            delivered(4, "Ham", "medium", vec![], at(5, 13)),
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.sizes[0].size, "medium");
        assert_eq!(report.sizes[0].count, 3);
        assert_eq!(report.sizes[0].share_pct, 75.0);
        assert_eq!(report.sizes[1].size, "family");
        assert_eq!(report.sizes[1].share_pct, 25.0);
        let total: f64 = report.sizes.iter().map(|s| s.share_pct).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_empty_window_is_all_zero() {
        let catalog = seed_catalog();
        let history = vec![delivered(1, "Margherita", "small", vec![], at(10, 12))];

        // Window that matches nothing.
        let report = build_report(&history, &catalog, at(20, 0), at(25, 0));
        assert_eq!(report.total_count, 0);
        assert_eq!(report.total_revenue, 0.0);
        assert!(report.top_flavors.is_empty());
        assert!(report.top_add_ons.is_empty());
        assert!(report.sizes.is_empty());
        assert!(report.per_day.is_empty());
    }

    #[test]
    fn test_orphaned_flavor_counts_but_earns_zero() {
        let mut catalog = seed_catalog();
        catalog.flavors.remove("Margherita");
        let (from, to) = window();
        let history = vec![
            delivered(1, "Margherita", "medium", vec![], at(10, 12)),
            delivered(2, "Calabresa", "medium", vec![], at(10, 13)),
        ];

        let report = build_report(&history, &catalog, from, to);
        assert_eq!(report.total_count, 2);
        assert_eq!(report.total_revenue, 42.0);
        assert_eq!(report.top_flavors[0].count, 1);
        assert_eq!(report.top_flavors.len(), 2);
    }

    #[test]
    fn test_revenue_follows_current_prices() {
        let mut catalog = seed_catalog();
        let (from, to) = window();
        let history = vec![delivered(1, "Margherita", "medium", vec![], at(10, 12))];

        let before = build_report(&history, &catalog, from, to);
        assert_eq!(before.total_revenue, 40.0);

        if let Some(flavor) = catalog.flavors.get_mut("Margherita") {
            flavor.prices_by_size.insert("medium".to_string(), 48.0);
        }
        let after = build_report(&history, &catalog, from, to);
        assert_eq!(after.total_revenue, 48.0);
    }
}
