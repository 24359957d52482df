//! Dashboard Filters
//!
//! Pure search/filter functions over the sample records. Every filter is a
//! function of `(records, criteria)`; running it twice yields the same rows.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::{Activity, ChecklistItem, Group, Order, OrderStatus, PackStatus};

/// Dropdown choice: everything, or one exact value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Exact(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Exact(wanted) => wanted == value,
        }
    }
}

impl Choice<String> {
    /// Parse a `<select>` value where `"all"` means no filter
    pub fn from_select(value: &str) -> Self {
        if value == "all" || value.is_empty() {
            Choice::All
        } else {
            Choice::Exact(value.to_string())
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_any(fields: &[&str], search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|field| contains_ci(field, &needle))
}

/// Distinct values in first-seen order
pub fn unique_values<T, F>(records: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let value = key(record);
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

// ========================
// Orders
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub search: String,
    pub group: Choice<String>,
    pub status: Choice<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        matches_any(&[&order.item, &order.vendor, &order.group], &self.search)
            && self.group.accepts(&order.group)
            && self.status.accepts(&order.status)
    }

    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}

/// Set the status of order `id`; `false` when no order has that id
pub fn update_order_status(orders: &mut [Order], id: u32, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|o| o.id == id) {
        Some(order) => {
            order.status = status;
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderCounts {
    pub ordered: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub delayed: usize,
}

impl OrderCounts {
    pub fn of(orders: &[Order]) -> Self {
        let mut counts = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Ordered => counts.ordered += 1,
                OrderStatus::InTransit => counts.in_transit += 1,
                OrderStatus::Delivered => counts.delivered += 1,
                OrderStatus::Delayed => counts.delayed += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Ordered => self.ordered,
            OrderStatus::InTransit => self.in_transit,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Delayed => self.delayed,
        }
    }
}

// ========================
// Checklist
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistFilter {
    pub search: String,
    pub group: Choice<String>,
    pub status: Choice<PackStatus>,
    pub assignee: Choice<String>,
}

impl ChecklistFilter {
    pub fn matches(&self, item: &ChecklistItem) -> bool {
        matches_any(&[&item.title, &item.description, &item.category], &self.search)
            && self.group.accepts(&item.group)
            && self.status.accepts(&item.status)
            && self.assignee.accepts(&item.assignee.name)
    }

    pub fn apply(&self, items: &[ChecklistItem]) -> Vec<ChecklistItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

pub fn update_item_status(items: &mut [ChecklistItem], id: u32, status: PackStatus) -> bool {
    match items.iter_mut().find(|i| i.id == id) {
        Some(item) => {
            item.status = status;
            true
        }
        None => false,
    }
}

/// `(packed or delivered, total)`
pub fn packed_ratio(items: &[ChecklistItem]) -> (usize, usize) {
    let done = items
        .iter()
        .filter(|i| i.status != PackStatus::ToPack)
        .count();
    (done, items.len())
}

// ========================
// Groups
// ========================

pub fn filter_groups(groups: &[Group], search: &str) -> Vec<Group> {
    groups
        .iter()
        .filter(|g| matches_any(&[&g.name, &g.description], search))
        .cloned()
        .collect()
}

/// One past the largest id, 1 for no rows
pub fn next_id<T>(rows: &[T], id: impl Fn(&T) -> u32) -> u32 {
    rows.iter().map(id).max().map_or(1, |max| max + 1)
}

/// Rounded mean of group progress, 0 for no groups
pub fn average_progress(groups: &[Group]) -> u8 {
    if groups.is_empty() {
        return 0;
    }
    let total: u32 = groups.iter().map(|g| u32::from(g.progress)).sum();
    (total as f64 / groups.len() as f64).round() as u8
}

// ========================
// Activity Logs
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    Yesterday,
    Week,
}

impl DateWindow {
    pub const ALL: [DateWindow; 4] = [
        DateWindow::All,
        DateWindow::Today,
        DateWindow::Yesterday,
        DateWindow::Week,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Today => "today",
            DateWindow::Yesterday => "yesterday",
            DateWindow::Week => "week",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateWindow::All => "All Time",
            DateWindow::Today => "Today",
            DateWindow::Yesterday => "Yesterday",
            DateWindow::Week => "This Week",
        }
    }

    /// Unparseable timestamps only pass `All`
    pub fn contains(&self, time: &str, now: NaiveDateTime) -> bool {
        if *self == DateWindow::All {
            return true;
        }
        let Some(at) = parse_time(time) else {
            return false;
        };
        let today = now.date();
        match self {
            DateWindow::All => true,
            DateWindow::Today => at.date() == today,
            DateWindow::Yesterday => today.pred_opt().is_some_and(|d| at.date() == d),
            DateWindow::Week => at > now - Duration::days(7),
        }
    }
}

pub fn parse_time(time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// `Aug 5, 2023 3:42 PM`
pub fn format_time(time: &str) -> String {
    parse_time(time)
        .map(|t| t.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| time.to_string())
}

pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// First `limit` rows unless expanded
pub fn limited<T: Clone>(rows: &[T], limit: Option<usize>, expanded: bool) -> Vec<T> {
    match limit {
        Some(n) if !expanded => rows.iter().take(n).cloned().collect(),
        _ => rows.to_vec(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub search: String,
    pub user: Choice<String>,
    pub action: Choice<String>,
    pub window: DateWindow,
}

impl ActivityFilter {
    pub fn matches(&self, activity: &Activity, now: NaiveDateTime) -> bool {
        matches_any(
            &[&activity.item, &activity.user.name, &activity.action, &activity.group],
            &self.search,
        ) && self.user.accepts(&activity.user.name)
            && self.action.accepts(&activity.action)
            && self.window.contains(&activity.time, now)
    }

    pub fn apply(&self, activities: &[Activity], now: NaiveDateTime) -> Vec<Activity> {
        activities
            .iter()
            .filter(|a| self.matches(a, now))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn at(s: &str) -> NaiveDateTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn test_order_search_is_case_insensitive() {
        let filter = OrderFilter {
            search: "OUTDOOR".into(),
            ..Default::default()
        };
        let rows = filter.apply(&mock::orders());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Tent");
    }

    #[test]
    fn test_order_filters_combine() {
        let filter = OrderFilter {
            search: String::new(),
            group: Choice::Exact("Camping Trip".into()),
            status: Choice::Exact(OrderStatus::InTransit),
        };
        let rows = filter.apply(&mock::orders());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Sleeping Bags");
    }

    #[test]
    fn test_filters_are_idempotent() {
        let orders = mock::orders();
        let filter = OrderFilter {
            search: "o".into(),
            status: Choice::Exact(OrderStatus::Delivered),
            ..Default::default()
        };
        let once = filter.apply(&orders);
        assert_eq!(filter.apply(&once), once);
        assert_eq!(filter.apply(&orders), once);

        let items = mock::checklist_items();
        let checklist = ChecklistFilter {
            search: "tent".into(),
            ..Default::default()
        };
        assert_eq!(checklist.apply(&items), checklist.apply(&items));

        let now = at("2023-08-05T18:00:00");
        let logs = ActivityFilter {
            window: DateWindow::Week,
            ..Default::default()
        };
        let first = logs.apply(&mock::activities(), now);
        assert_eq!(logs.apply(&first, now), first);
    }

    #[test]
    fn test_checklist_filter_by_assignee_and_status() {
        let filter = ChecklistFilter {
            assignee: Choice::Exact("Alex".into()),
            status: Choice::Exact(PackStatus::ToPack),
            ..Default::default()
        };
        let titles: Vec<String> = filter
            .apply(&mock::checklist_items())
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["Tent", "Water Filter"]);
    }

    #[test]
    fn test_group_search() {
        let rows = filter_groups(&mock::groups(), "hawaii");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Family Vacation");
        assert_eq!(filter_groups(&mock::groups(), "  ").len(), 4);
    }

    #[test]
    fn test_date_windows() {
        let now = at("2023-08-05T18:00:00");
        let activities = mock::activities();
        let count = |window| {
            ActivityFilter { window, ..Default::default() }
                .apply(&activities, now)
                .len()
        };
        assert_eq!(count(DateWindow::All), 8);
        assert_eq!(count(DateWindow::Today), 2);
        assert_eq!(count(DateWindow::Yesterday), 2);
        // 2023-07-29T18:00 cutoff keeps all eight
        assert_eq!(count(DateWindow::Week), 8);
        assert!(!DateWindow::Week.contains("2023-07-29T18:00:00", now));
        assert!(!DateWindow::Today.contains("garbage", now));
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        let groups = unique_values(&mock::orders(), |o| o.group.as_str());
        assert_eq!(groups, vec!["Camping Trip", "Office Party", "Family Vacation"]);
    }

    #[test]
    fn test_status_updates() {
        let mut orders = mock::orders();
        assert!(update_order_status(&mut orders, 3, OrderStatus::Delayed));
        assert_eq!(orders[2].status, OrderStatus::Delayed);
        assert!(!update_order_status(&mut orders, 99, OrderStatus::Delivered));

        let mut items = mock::checklist_items();
        assert!(update_item_status(&mut items, 1, PackStatus::Packed));
        assert_eq!(packed_ratio(&items), (4, 6));
        assert!(!update_item_status(&mut items, 42, PackStatus::Packed));
    }

    #[test]
    fn test_summary_counters() {
        let counts = OrderCounts::of(&mock::orders());
        assert_eq!(counts.delivered, 2);
        assert_eq!(counts.get(OrderStatus::InTransit), 2);
        assert_eq!(average_progress(&mock::groups()), 53);
        assert_eq!(average_progress(&[]), 0);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&mock::groups(), |g| g.id), 5);
        assert_eq!(next_id::<Group>(&[], |g| g.id), 1);
    }

    #[test]
    fn test_limited_rows() {
        let rows = mock::activities();
        assert_eq!(limited(&rows, Some(5), false).len(), 5);
        assert_eq!(limited(&rows, Some(5), true).len(), 8);
        assert_eq!(limited(&rows, None, false).len(), 8);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_time("2023-08-05T15:42:00"), "Aug 5, 2023 3:42 PM");
        assert_eq!(format_date("2023-08-02"), "Aug 2, 2023");
        assert_eq!(format_date("soon"), "soon");
    }
}
