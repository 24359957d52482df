//! Form Drafts
//!
//! Raw values from the "New Order" and "Add Item" dialogs, validated into
//! records. Ids are assigned by the caller.

use chrono::NaiveDate;

use crate::models::{ChecklistItem, Order, OrderStatus, PackStatus, Person, Priority};

#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    MissingName,
    BadPrice(String),
    BadQuantity(String),
    BadDate(String),
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::MissingName => write!(f, "Please enter an item name"),
            DraftError::BadPrice(raw) => write!(f, "\"{raw}\" is not a valid price"),
            DraftError::BadQuantity(raw) => write!(f, "\"{raw}\" is not a valid quantity"),
            DraftError::BadDate(raw) => write!(f, "\"{raw}\" is not a valid date"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Initials for an avatar: first letter of the first two words
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

// ========================
// Orders
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub item: String,
    pub group: String,
    pub vendor: String,
    /// Blank means 0.00
    pub price: String,
    /// `YYYY-MM-DD`; blank means not yet known
    pub estimated_delivery: String,
    pub notes: String,
}

impl OrderDraft {
    /// A freshly placed order, status `Ordered`, dated `today`
    pub fn into_order(self, id: u32, today: NaiveDate, ordered_by: Person) -> Result<Order, DraftError> {
        let item = self.item.trim();
        if item.is_empty() {
            return Err(DraftError::MissingName);
        }

        let price = match self.price.trim() {
            "" => 0.0,
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| DraftError::BadPrice(raw.to_string()))?,
        };

        let estimated_delivery = match self.estimated_delivery.trim() {
            "" => String::new(),
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| DraftError::BadDate(raw.to_string()))?
                .format("%Y-%m-%d")
                .to_string(),
        };

        Ok(Order {
            id,
            item: item.to_string(),
            group: self.group.trim().to_string(),
            status: OrderStatus::Ordered,
            ordered_date: today.format("%Y-%m-%d").to_string(),
            estimated_delivery,
            actual_delivery: None,
            price,
            vendor: self.vendor.trim().to_string(),
            ordered_by,
            notes: self.notes.trim().to_string(),
        })
    }
}

// ========================
// Checklist Items
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub quantity: String,
    pub category: String,
    pub assignee: String,
    pub group: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            quantity: "1".to_string(),
            category: String::new(),
            assignee: String::new(),
            group: String::new(),
        }
    }
}

impl ItemDraft {
    /// A new row still to be packed. The assignee keeps the initials already
    /// shown for that name in `known`, if any.
    pub fn into_item(self, id: u32, known: &[ChecklistItem]) -> Result<ChecklistItem, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingName);
        }

        let raw_quantity = self.quantity.trim();
        let quantity = raw_quantity
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| DraftError::BadQuantity(raw_quantity.to_string()))?;

        let name = self.assignee.trim();
        let assignee = known
            .iter()
            .map(|i| &i.assignee)
            .find(|p| p.name == name)
            .cloned()
            .unwrap_or_else(|| Person::new(name, &initials(name)));

        Ok(ChecklistItem {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            quantity,
            category: self.category.trim().to_string(),
            status: PackStatus::ToPack,
            assignee,
            group: self.group.trim().to_string(),
        })
    }
}

pub fn remove_item(items: &mut Vec<ChecklistItem>, id: u32) -> bool {
    let before = items.len();
    items.retain(|i| i.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn buyer() -> Person {
        Person::new("Alex Johnson", "AJ")
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("sarah lee"), "SL");
        assert_eq!(initials("  Mike  "), "M");
        assert_eq!(initials("Anna Maria Lopez"), "AM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_order_from_draft() {
        let draft = OrderDraft {
            item: "  Camp Stove ".into(),
            group: "Camping Trip".into(),
            vendor: "OutdoorGear".into(),
            price: "49.5".into(),
            estimated_delivery: "2023-08-12".into(),
            notes: String::new(),
        };
        let order = draft.into_order(9, day("2023-08-05"), buyer()).unwrap();
        assert_eq!(order.id, 9);
        assert_eq!(order.item, "Camp Stove");
        assert_eq!(order.status, OrderStatus::Ordered);
        assert_eq!(order.ordered_date, "2023-08-05");
        assert_eq!(order.estimated_delivery, "2023-08-12");
        assert_eq!(order.price, 49.5);
        assert_eq!(order.actual_delivery, None);
    }

    #[test]
    fn test_order_draft_rejections() {
        let named = |price: &str, date: &str| OrderDraft {
            item: "Lantern".into(),
            price: price.into(),
            estimated_delivery: date.into(),
            ..Default::default()
        };
        let today = day("2023-08-05");
        assert_eq!(OrderDraft::default().into_order(1, today, buyer()), Err(DraftError::MissingName));
        assert_eq!(named("abc", "").into_order(1, today, buyer()), Err(DraftError::BadPrice("abc".into())));
        assert_eq!(named("-3", "").into_order(1, today, buyer()), Err(DraftError::BadPrice("-3".into())));
        assert_eq!(named("", "next week").into_order(1, today, buyer()), Err(DraftError::BadDate("next week".into())));
        assert_eq!(named("", "").into_order(1, today, buyer()).unwrap().price, 0.0);
    }

    #[test]
    fn test_item_reuses_known_assignee() {
        let known = mock::checklist_items();
        let existing = known[0].assignee.clone();
        let draft = ItemDraft {
            title: "Headlamp".into(),
            assignee: existing.name.clone(),
            quantity: "2".into(),
            ..Default::default()
        };
        let item = draft.into_item(42, &known).unwrap();
        assert_eq!(item.assignee, existing);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.status, PackStatus::ToPack);
        assert_eq!(item.priority, Priority::Medium);
    }

    #[test]
    fn test_item_new_assignee_gets_initials() {
        let draft = ItemDraft {
            title: "Rope".into(),
            assignee: "Dana Park".into(),
            ..Default::default()
        };
        let item = draft.into_item(1, &[]).unwrap();
        assert_eq!(item.assignee, Person::new("Dana Park", "DP"));
    }

    #[test]
    fn test_item_draft_rejections() {
        assert_eq!(ItemDraft::default().into_item(1, &[]), Err(DraftError::MissingName));
        let zero = ItemDraft {
            title: "Rope".into(),
            quantity: "0".into(),
            ..Default::default()
        };
        assert_eq!(zero.into_item(1, &[]), Err(DraftError::BadQuantity("0".into())));
    }

    #[test]
    fn test_remove_item() {
        let mut items = mock::checklist_items();
        let id = items[1].id;
        let count = items.len();
        assert!(remove_item(&mut items, id));
        assert_eq!(items.len(), count - 1);
        assert!(items.iter().all(|i| i.id != id));
        assert!(!remove_item(&mut items, id));
    }
}
