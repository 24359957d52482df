//! Sample Data
//!
//! Hard-coded records standing in for a backend. Every page gets a fresh
//! copy; edits live only as long as the page session.

use crate::models::{
    Activity, ChecklistItem, Delivery, Group, Member, Order, OrderStatus, PackStatus, Person,
    Priority, Role, TimelineStep, TrackingData, TransportMode,
};

/// Canned live-status messages, pushed one per tick on the track page
pub const STATUS_UPDATES: [&str; 5] = [
    "Package scanned in Chicago, IL",
    "Departed Chicago hub",
    "Arrived in Denver, CO",
    "Out for delivery",
    "Delivered successfully!",
];

/// Headline numbers on the information page (value, label)
pub const TRANSPORT_STATS: &[(&str, &str)] = &[
    ("15,000+", "Shipments Monthly"),
    ("98%", "On-time Delivery"),
    ("120+", "Countries Served"),
    ("4.8/5", "Customer Rating"),
];

/// (quote, author, company)
pub const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "The flexibility of your logistics solutions has transformed our supply chain efficiency.",
        "Maria Garcia, Supply Chain Director",
        "TechGlobal Industries",
    ),
    (
        "Eco-friendly shipping options helped us reduce our carbon footprint by 35% this year.",
        "James Wilson, Sustainability Manager",
        "GreenLife Products",
    ),
];

/// (title, description)
pub const UPCOMING_FEATURES: &[(&str, &str)] = &[
    ("Real-time Tracking", "Enhanced GPS tracking with minute-by-minute updates and predictive delivery estimates."),
    ("Carbon Calculator", "Measure the environmental impact of your shipments and explore greener alternatives."),
    ("Scheduled Deliveries", "Set up recurring shipments with our automated scheduling system."),
];

/// Landing page feature tiles
pub const LANDING_FEATURES: &[&str] = &["Road Transport", "Air Freight", "Express Delivery"];

/// Landing page order history (id, status, date, item count)
pub const LANDING_ORDERS: &[(&str, &str, &str, u32)] = &[
    ("ORD-2025-04001", "Delivered", "Apr 10, 2025", 3),
    ("ORD-2025-03098", "In Transit", "Apr 8, 2025", 1),
    ("ORD-2025-03045", "Pending", "Apr 5, 2025", 5),
];

/// Landing page activity (action, timestamp, user)
pub const LANDING_ACTIVITY: &[(&str, &str, &str)] = &[
    ("Package Scanned", "Today, 10:30 AM", "John D."),
    ("Order Created", "Yesterday, 4:45 PM", "Sarah M."),
    ("Delivery Confirmed", "Apr 11, 2:20 PM", "Team Lead"),
];

/// Landing page profile card
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub team: &'static str,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Johnson",
    role: "Logistics Manager",
    team: "North East Division",
    completed_tasks: 42,
    pending_tasks: 7,
};

pub fn transport_modes() -> Vec<TransportMode> {
    let mode = |name: &str, description: &str, details: &str, time: &str, cost: &str, green: &str| TransportMode {
        name: name.to_string(),
        description: description.to_string(),
        details: details.to_string(),
        estimated_time: time.to_string(),
        cost_efficiency: cost.to_string(),
        sustainability: green.to_string(),
    };
    vec![
        mode(
            "Air Transport",
            "Lightning-fast international shipping",
            "Our air freight services offer the quickest transit times for urgent shipments. We partner with major airlines to ensure global coverage and reliable schedules.",
            "Fast (1-3 days for international)",
            "High cost, premium service",
            "Higher carbon footprint",
        ),
        mode(
            "Rail Transport",
            "Eco-friendly continental shipping",
            "Rail transport is perfect for heavy or bulky items. It's a cost-effective and environmentally friendly option for continental shipments with reduced carbon emissions compared to road transport.",
            "Medium (3-7 days depending on distance)",
            "Cost-effective for bulk shipments",
            "Low carbon footprint, energy efficient",
        ),
        mode(
            "Road Transport",
            "Flexible door-to-door delivery",
            "Our road freight services offer door-to-door delivery with flexible scheduling. It's ideal for local and regional shipments with multiple stops and last-mile delivery requirements.",
            "Variable (hours to days based on distance)",
            "Affordable for short to medium distances",
            "Moderate emissions, increasingly electric options",
        ),
    ]
}

/// The fixed record shown for any tracking number
pub fn tracking_data() -> TrackingData {
    let step = |status: &str, date: &str, completed: bool| TimelineStep {
        status: status.to_string(),
        date: date.to_string(),
        completed,
    };
    TrackingData {
        status: "In Transit".to_string(),
        location: "Chicago, IL".to_string(),
        estimated_delivery: "2023-06-15".to_string(),
        timeline: vec![
            step("Order Placed", "2023-06-10", true),
            step("Picked Up", "2023-06-11", true),
            step("In Transit", "2023-06-12", false),
            step("Out for Delivery", "2023-06-15", false),
            step("Delivered", "", false),
        ],
    }
}

pub fn orders() -> Vec<Order> {
    #[allow(clippy::too_many_arguments)]
    fn order(
        id: u32,
        item: &str,
        group: &str,
        status: OrderStatus,
        dates: (&str, &str, Option<&str>),
        price: f64,
        vendor: &str,
        ordered_by: Person,
        notes: &str,
    ) -> Order {
        Order {
            id,
            item: item.to_string(),
            group: group.to_string(),
            status,
            ordered_date: dates.0.to_string(),
            estimated_delivery: dates.1.to_string(),
            actual_delivery: dates.2.map(str::to_string),
            price,
            vendor: vendor.to_string(),
            ordered_by,
            notes: notes.to_string(),
        }
    }

    vec![
        order(1, "Tent", "Camping Trip", OrderStatus::Delivered,
            ("2023-07-25", "2023-08-02", Some("2023-08-01")), 129.99, "OutdoorGear",
            Person::new("Alex", "AJ"), "Delivered early, in perfect condition"),
        order(2, "Sleeping Bags", "Camping Trip", OrderStatus::InTransit,
            ("2023-07-28", "2023-08-05", None), 89.99, "SleepWell",
            Person::new("Jamie", "JT"), "Tracking shows it's on the way"),
        order(3, "Cooler", "Camping Trip", OrderStatus::Ordered,
            ("2023-08-01", "2023-08-10", None), 75.5, "CoolStuff",
            Person::new("Taylor", "TS"), "Order confirmed"),
        order(4, "Office Supplies", "Office Party", OrderStatus::Delivered,
            ("2023-07-15", "2023-07-20", Some("2023-07-19")), 45.25, "OfficeDepot",
            Person::new("Morgan", "MR"), "All items received"),
        order(5, "Decorations", "Office Party", OrderStatus::Delayed,
            ("2023-07-20", "2023-07-30", None), 65.75, "PartyCity",
            Person::new("Casey", "CK"), "Shipping delayed due to weather"),
        order(6, "Beach Umbrellas", "Family Vacation", OrderStatus::InTransit,
            ("2023-07-10", "2023-07-25", None), 120.0, "BeachGear",
            Person::new("Jordan", "JK"), "Tracking shows it's on the way"),
    ]
}

pub fn checklist_items() -> Vec<ChecklistItem> {
    let item = |id: u32, title: &str, description: &str, priority: Priority, quantity: u32,
                category: &str, status: PackStatus, assignee: Person| ChecklistItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        quantity,
        category: category.to_string(),
        status,
        assignee,
        group: "Camping Trip".to_string(),
    };

    vec![
        item(1, "Tent", "4-person tent with rainfly", Priority::High, 1, "Shelter", PackStatus::ToPack, Person::new("Alex", "AJ")),
        item(2, "Sleeping Bags", "Rated for 30°F", Priority::High, 4, "Shelter", PackStatus::Packed, Person::new("Jamie", "JT")),
        item(3, "Cooler", "With ice packs", Priority::Medium, 1, "Food", PackStatus::ToPack, Person::new("Taylor", "TS")),
        item(4, "First Aid Kit", "Basic supplies", Priority::High, 1, "Safety", PackStatus::Packed, Person::new("Morgan", "MR")),
        item(5, "Portable Stove", "With fuel", Priority::Medium, 1, "Cooking", PackStatus::Delivered, Person::new("Casey", "CK")),
        item(6, "Water Filter", "Gravity filter system", Priority::High, 1, "Water", PackStatus::ToPack, Person::new("Alex", "AJ")),
    ]
}

pub fn groups() -> Vec<Group> {
    let member = |id: u32, name: &str, initials: &str, online: bool, role: Role| Member {
        id,
        name: name.to_string(),
        initials: initials.to_string(),
        online,
        role,
    };
    let group = |id: u32, name: &str, description: &str, members: Vec<Member>, checklists: u32, items: u32, progress: u8| Group {
        id,
        name: name.to_string(),
        description: description.to_string(),
        members,
        checklists,
        items,
        progress,
    };

    vec![
        group(1, "Camping Trip", "Annual camping trip to Yosemite", vec![
            member(1, "Alex", "AJ", true, Role::Admin),
            member(2, "Jamie", "JT", false, Role::Member),
            member(3, "Taylor", "TS", true, Role::Member),
        ], 3, 24, 65),
        group(2, "Office Party", "End of year celebration", vec![
            member(1, "Morgan", "MR", true, Role::Admin),
            member(4, "Casey", "CK", true, Role::Member),
            member(5, "Riley", "RB", false, Role::Member),
        ], 2, 18, 40),
        group(3, "Family Vacation", "Summer trip to Hawaii", vec![
            member(6, "Jordan", "JK", true, Role::Admin),
            member(7, "Avery", "AW", false, Role::Member),
        ], 4, 32, 25),
        group(4, "Conference Setup", "Annual tech conference", vec![
            member(8, "Quinn", "QS", true, Role::Admin),
            member(9, "Parker", "PL", true, Role::Member),
        ], 5, 45, 80),
    ]
}

pub fn activities() -> Vec<Activity> {
    let activity = |id: u32, user: Person, action: &str, item: &str, time: &str, group: &str| Activity {
        id,
        user,
        action: action.to_string(),
        item: item.to_string(),
        time: time.to_string(),
        group: group.to_string(),
    };

    vec![
        activity(1, Person::new("Ravi", "RK"), "packed", "Power Bank", "2023-08-05T15:42:00", "Camping Trip"),
        activity(2, Person::new("Sarah", "SJ"), "ordered", "Tent", "2023-08-05T14:15:00", "Camping Trip"),
        activity(3, Person::new("Mike", "ML"), "marked as in transit", "Sleeping Bags", "2023-08-04T10:30:00", "Camping Trip"),
        activity(4, Person::new("Lisa", "LT"), "added", "First Aid Kit", "2023-08-04T09:15:00", "Camping Trip"),
        activity(5, Person::new("John", "JD"), "delivered", "Cooler", "2023-08-03T16:45:00", "Camping Trip"),
        activity(6, Person::new("Emma", "EW"), "assigned", "Cooking Supplies", "2023-08-03T11:20:00", "Camping Trip"),
        activity(7, Person::new("Alex", "AJ"), "created checklist", "Camping Essentials", "2023-08-02T09:30:00", "Camping Trip"),
        activity(8, Person::new("Morgan", "MR"), "created group", "Office Party", "2023-08-01T14:00:00", "Office Party"),
    ]
}

pub fn upcoming_deliveries() -> Vec<Delivery> {
    let delivery = |id: u32, item: &str, vendor: &str, ordered: &str, eta: &str, status: OrderStatus, is_delayed: bool| Delivery {
        id,
        item: item.to_string(),
        vendor: vendor.to_string(),
        ordered_date: ordered.to_string(),
        estimated_delivery: eta.to_string(),
        status,
        is_delayed,
        group: "Camping Trip".to_string(),
    };

    vec![
        delivery(1, "Tent", "OutdoorGear", "2023-08-01", "2023-08-07", OrderStatus::InTransit, false),
        delivery(2, "Sleeping Bags", "SleepWell", "2023-08-02", "2023-08-08", OrderStatus::InTransit, false),
        delivery(3, "Cooler", "CoolStuff", "2023-08-03", "2023-08-06", OrderStatus::Ordered, true),
        delivery(4, "Portable Grill", "OutdoorCooking", "2023-08-04", "2023-08-10", OrderStatus::Ordered, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(orders().len(), 6);
        assert_eq!(checklist_items().len(), 6);
        assert_eq!(groups().len(), 4);
        assert_eq!(activities().len(), 8);
        assert_eq!(upcoming_deliveries().len(), 4);
        assert_eq!(transport_modes().len(), 3);
    }

    #[test]
    fn test_tracking_timeline_has_five_steps() {
        let data = tracking_data();
        assert_eq!(data.timeline.len(), 5);
        assert_eq!(data.current_step(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = orders().iter().map(|o| o.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
