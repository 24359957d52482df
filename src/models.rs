//! Frontend Models
//!
//! Display records for the dashboards plus the route contract types
//! (matches route-service).

use serde::{Deserialize, Serialize};

/// Who did something, as shown next to an avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub initials: String,
}

impl Person {
    pub fn new(name: &str, initials: &str) -> Self {
        Self {
            name: name.to_string(),
            initials: initials.to_string(),
        }
    }
}

// ========================
// Orders & Deliveries
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Ordered,
    InTransit,
    Delivered,
    Delayed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Ordered,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
        OrderStatus::Delayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "ordered",
            OrderStatus::InTransit => "in-transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Delayed => "delayed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Ordered",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub item: String,
    pub group: String,
    pub status: OrderStatus,
    pub ordered_date: String,
    pub estimated_delivery: String,
    pub actual_delivery: Option<String>,
    pub price: f64,
    pub vendor: String,
    pub ordered_by: Person,
    pub notes: String,
}

/// Dashboard "upcoming deliveries" row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: u32,
    pub item: String,
    pub vendor: String,
    pub ordered_date: String,
    pub estimated_delivery: String,
    pub status: OrderStatus,
    pub is_delayed: bool,
    pub group: String,
}

impl Delivery {
    /// Badge text; a delay overrides the status
    pub fn badge(&self) -> &'static str {
        if self.is_delayed {
            "Delayed"
        } else {
            self.status.label()
        }
    }
}

// ========================
// Checklists
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackStatus {
    ToPack,
    Packed,
    Delivered,
}

impl PackStatus {
    pub const ALL: [PackStatus; 3] = [PackStatus::ToPack, PackStatus::Packed, PackStatus::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackStatus::ToPack => "to-pack",
            PackStatus::Packed => "packed",
            PackStatus::Delivered => "delivered",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackStatus::ToPack => "To Pack",
            PackStatus::Packed => "Packed",
            PackStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub quantity: u32,
    pub category: String,
    pub status: PackStatus,
    pub assignee: Person,
    pub group: String,
}

// ========================
// Groups
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub online: bool,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub members: Vec<Member>,
    pub checklists: u32,
    pub items: u32,
    /// Percent complete, 0..=100
    pub progress: u8,
}

// ========================
// Activity
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub user: Person,
    pub action: String,
    pub item: String,
    /// Local date-time, `YYYY-MM-DDTHH:MM:SS`
    pub time: String,
    pub group: String,
}

// ========================
// Landing / Information
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportMode {
    pub name: String,
    pub description: String,
    pub details: String,
    pub estimated_time: String,
    pub cost_efficiency: String,
    pub sustainability: String,
}

// ========================
// Package Tracking
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub status: String,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingData {
    pub status: String,
    pub location: String,
    pub estimated_delivery: String,
    pub timeline: Vec<TimelineStep>,
}

impl TrackingData {
    /// Index of the first step not yet completed, or the step count when
    /// everything is done
    pub fn current_step(&self) -> usize {
        self.timeline
            .iter()
            .position(|step| !step.completed)
            .unwrap_or(self.timeline.len())
    }
}

// ========================
// Route Contract (matches route-service)
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub start: Coordinates,
    pub end: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub time_min: f64,
    pub traffic_delay_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDetails {
    pub segments: Vec<RouteSegment>,
    pub summary: RouteSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub start: Place,
    pub end: Place,
    pub route: RouteDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Coordinates,
    pub label: String,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub title: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub path: Vec<Coordinates>,
    pub summary: RouteSummary,
}

/// `{"error": ...}` body from the route service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
