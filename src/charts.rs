//! Overview Charts
//!
//! Sample series for the overview charts and heatmap. Values come from a
//! seeded generator so a given range always renders the same numbers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Members shown on the heatmap and the members bar chart
pub const TEAM: [&str; 5] = ["Alex", "Jamie", "Taylor", "Morgan", "Casey"];
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Day, TimeRange::Week, TimeRange::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Today",
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
        }
    }

    pub fn labels(&self) -> Vec<String> {
        match self {
            TimeRange::Day => (0..24).map(|h| format!("{h}:00")).collect(),
            TimeRange::Week => WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            TimeRange::Month => (1..=30).map(|d| format!("Day {d}")).collect(),
        }
    }

    fn seed(&self) -> u64 {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }
}

// ========================
// Series
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct AreaPoint {
    pub label: String,
    pub packed: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub member: String,
    pub completed: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// Packed 20..70 and pending 10..40 per label
pub fn area_series(range: TimeRange) -> Vec<AreaPoint> {
    let mut rng = SmallRng::seed_from_u64(range.seed());
    range
        .labels()
        .into_iter()
        .map(|label| AreaPoint {
            label,
            packed: rng.gen_range(20..70),
            pending: rng.gen_range(10..40),
        })
        .collect()
}

/// Completed 10..60 and pending 5..35 per team member
pub fn bar_series(range: TimeRange) -> Vec<BarPoint> {
    let mut rng = SmallRng::seed_from_u64(range.seed() * 31);
    TEAM.iter()
        .map(|member| BarPoint {
            member: member.to_string(),
            completed: rng.gen_range(10..60),
            pending: rng.gen_range(5..35),
        })
        .collect()
}

pub fn pie_series() -> [PieSlice; 3] {
    [
        PieSlice { label: "Packed", value: 68, color: "#10b981" },
        PieSlice { label: "In Transit", value: 12, color: "#3b82f6" },
        PieSlice { label: "Pending", value: 20, color: "#f97316" },
    ]
}

/// SVG arc path for a pie slice between two fractions of a full turn
pub fn pie_arc(cx: f64, cy: f64, r: f64, from: f64, to: f64) -> String {
    let point = |frac: f64| {
        let angle = frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };
    let (x0, y0) = point(from);
    let (x1, y1) = point(to);
    let large = if to - from > 0.5 { 1 } else { 0 };
    format!("M {cx} {cy} L {x0:.2} {y0:.2} A {r} {r} 0 {large} 1 {x1:.2} {y1:.2} Z")
}

// ========================
// Heatmap
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ActivityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => ActivityLevel::None,
            1..=2 => ActivityLevel::Low,
            3..=5 => ActivityLevel::Medium,
            6..=8 => ActivityLevel::High,
            _ => ActivityLevel::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::None => "No activity",
            ActivityLevel::Low => "Low activity",
            ActivityLevel::Medium => "Medium activity",
            ActivityLevel::High => "High activity",
            ActivityLevel::VeryHigh => "Very high activity",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityLevel::None => "heat-none",
            ActivityLevel::Low => "heat-low",
            ActivityLevel::Medium => "heat-medium",
            ActivityLevel::High => "heat-high",
            ActivityLevel::VeryHigh => "heat-very-high",
        }
    }
}

/// 7 weekday rows by 5 member columns, each 0..=9
pub fn heatmap() -> Vec<[u8; 5]> {
    let mut rng = SmallRng::seed_from_u64(7 * 5);
    WEEKDAYS
        .iter()
        .map(|_| std::array::from_fn(|_| rng.gen_range(0..10)))
        .collect()
}

// ========================
// Counters
// ========================

/// Cubic ease-out from 0 to `target`, floored, reaching `target` at `duration_ms`
pub fn counter_frame(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - t).powi(3);
    ((f64::from(target) * eased).floor() as u32).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_counts() {
        assert_eq!(TimeRange::Day.labels().len(), 24);
        assert_eq!(TimeRange::Week.labels()[0], "Mon");
        assert_eq!(TimeRange::Month.labels()[29], "Day 30");
    }

    #[test]
    fn test_area_series_ranges_and_stability() {
        for range in TimeRange::ALL {
            let series = area_series(range);
            assert_eq!(series.len(), range.labels().len());
            assert!(series.iter().all(|p| (20..70).contains(&p.packed)));
            assert!(series.iter().all(|p| (10..40).contains(&p.pending)));
            assert_eq!(series, area_series(range));
        }
    }

    #[test]
    fn test_bar_series_per_member() {
        let bars = bar_series(TimeRange::Week);
        assert_eq!(bars.len(), 5);
        assert!(bars.iter().all(|b| (10..60).contains(&b.completed) && (5..35).contains(&b.pending)));
    }

    #[test]
    fn test_pie_shares_sum_to_hundred() {
        assert_eq!(pie_series().iter().map(|s| s.value).sum::<u32>(), 100);
    }

    #[test]
    fn test_activity_levels() {
        assert_eq!(ActivityLevel::from_count(0), ActivityLevel::None);
        assert_eq!(ActivityLevel::from_count(2), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_count(3), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::from_count(8), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_count(9).label(), "Very high activity");
    }

    #[test]
    fn test_heatmap_shape() {
        let grid = heatmap();
        assert_eq!(grid.len(), 7);
        assert!(grid.iter().flatten().all(|v| *v <= 9));
    }

    #[test]
    fn test_counter_frame_eases_and_clamps() {
        assert_eq!(counter_frame(100, 0, 2000), 0);
        let mid = counter_frame(100, 1000, 2000);
        assert!(mid > 50 && mid < 100, "ease-out should pass halfway early: {mid}");
        assert_eq!(counter_frame(100, 2000, 2000), 100);
        assert_eq!(counter_frame(100, 9999, 2000), 100);
        assert_eq!(counter_frame(7, 10, 0), 7);
    }

    #[test]
    fn test_pie_arc_path() {
        let path = pie_arc(50.0, 50.0, 40.0, 0.0, 0.25);
        assert!(path.starts_with("M 50 50 L 50.00 10.00 A 40 40 0 0 1 90.00 50.00"));
    }
}
