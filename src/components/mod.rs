//! UI Components
//!
//! Leptos components for the public pages and the dashboard.

mod activity_logs;
mod checklist_management;
mod counter_value;
mod dashboard_charts;
mod dashboard_layout;
mod dashboard_overview;
mod group_detail_modal;
mod group_management;
mod information_page;
mod landing_page;
mod order_management;
mod page_header;
mod pickup_form;
mod pickup_page;
mod recent_activity;
mod route_map;
mod settings_panel;
mod toast_stack;
mod track_page;
mod tracking_timeline;
mod upcoming_deliveries;

pub use activity_logs::ActivityLogs;
pub use checklist_management::ChecklistManagement;
pub use counter_value::CounterValue;
pub use dashboard_charts::{DashboardCharts, DashboardHeatmap};
pub use dashboard_layout::DashboardLayout;
pub use dashboard_overview::DashboardOverview;
pub use group_detail_modal::GroupDetailModal;
pub use group_management::GroupManagement;
pub use information_page::InformationPage;
pub use landing_page::LandingPage;
pub use order_management::OrderManagement;
pub use page_header::{Logo, PageHeader};
pub use pickup_form::PickupForm;
pub use pickup_page::{PaymentPage, PickupPage, PickupSuccessPage};
pub use recent_activity::RecentActivity;
pub use route_map::RouteMap;
pub use settings_panel::SettingsPanel;
pub use toast_stack::ToastStack;
pub use track_page::TrackPage;
pub use tracking_timeline::TrackingTimeline;
pub use upcoming_deliveries::UpcomingDeliveries;
