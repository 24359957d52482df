//! Hash Navigation
//!
//! Maps `location.hash` to a page and back. Pickup payloads stay
//! percent-encoded inside the page value; `pickup::decode_query` unpacks them.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Groups,
    Checklists,
    Orders,
    Logs,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        DashboardTab::Overview,
        DashboardTab::Groups,
        DashboardTab::Checklists,
        DashboardTab::Orders,
        DashboardTab::Logs,
        DashboardTab::Settings,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "",
            DashboardTab::Groups => "groups",
            DashboardTab::Checklists => "checklists",
            DashboardTab::Orders => "orders",
            DashboardTab::Logs => "logs",
            DashboardTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Dashboard",
            DashboardTab::Groups => "Groups",
            DashboardTab::Checklists => "Checklists",
            DashboardTab::Orders => "Orders & Deliveries",
            DashboardTab::Logs => "Activity Logs",
            DashboardTab::Settings => "Settings",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Page {
    #[default]
    Home,
    Information,
    Pickup,
    /// `data` is the still-encoded pickup payload
    PickupSuccess { data: String },
    /// Raw `amount` parameter, if any
    Payment { amount: Option<String> },
    Track,
    Dashboard(DashboardTab),
}

/// Raw `key=value` pairs; values keep their percent-encoding
fn query_pairs<'a>(query: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

fn raw_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query_pairs(query).find(|(k, _)| *k == key).map(|(_, v)| v)
}

fn decoded_param(query: &str, key: &str) -> Option<String> {
    raw_param(query, key).map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
}

impl Page {
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash.trim_start_matches('#');
        let (path, query) = trimmed.split_once('?').unwrap_or((trimmed, ""));
        let path = path.trim_matches('/');

        match path {
            "" => Page::Home,
            "information" => Page::Information,
            "pickup" => Page::Pickup,
            "pickup/success" => Page::PickupSuccess {
                data: raw_param(query, "data").unwrap_or_default().to_string(),
            },
            "pickup/success/payment" => Page::Payment {
                amount: decoded_param(query, "amount"),
            },
            "track" => Page::Track,
            "dashboard" => Page::Dashboard(DashboardTab::Overview),
            other => other
                .strip_prefix("dashboard/")
                .and_then(DashboardTab::from_slug)
                .map(Page::Dashboard)
                .unwrap_or_default(),
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::Information => "#/information".to_string(),
            Page::Pickup => "#/pickup".to_string(),
            Page::PickupSuccess { data } => format!("#/pickup/success?data={data}"),
            Page::Payment { amount: Some(amount) } => format!(
                "#/pickup/success/payment?amount={}",
                utf8_percent_encode(amount, NON_ALPHANUMERIC)
            ),
            Page::Payment { amount: None } => "#/pickup/success/payment".to_string(),
            Page::Track => "#/track".to_string(),
            Page::Dashboard(DashboardTab::Overview) => "#/dashboard".to_string(),
            Page::Dashboard(tab) => format!("#/dashboard/{}", tab.slug()),
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, Page::Dashboard(_))
    }
}
