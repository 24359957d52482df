//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Seeded from the
//! sample data; edits last for the page session.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::drafts::{self, DraftError, ItemDraft, OrderDraft};
use crate::filter;
use crate::mock;
use crate::models::{Activity, ChecklistItem, Delivery, Group, Member, Order, OrderStatus, PackStatus, Person};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub orders: Vec<Order>,
    /// Checklist rows in display order (drag to reorder)
    pub checklist: Vec<ChecklistItem>,
    pub groups: Vec<Group>,
    pub activities: Vec<Activity>,
    pub deliveries: Vec<Delivery>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: mock::orders(),
            checklist: mock::checklist_items(),
            groups: mock::groups(),
            activities: mock::activities(),
            deliveries: mock::upcoming_deliveries(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_order_status(store: &AppStore, id: u32, status: OrderStatus) -> bool {
    filter::update_order_status(store.orders().write().as_mut_slice(), id, status)
}

pub fn store_set_item_status(store: &AppStore, id: u32, status: PackStatus) -> bool {
    filter::update_item_status(store.checklist().write().as_mut_slice(), id, status)
}

/// Move checklist row `dragged` onto `target`
pub fn store_reorder_checklist(store: &AppStore, dragged: u32, target: leptos_dragdrop::DropTarget) -> bool {
    let field = store.checklist();
    let mut items = field.write();
    leptos_dragdrop::reorder(&mut *items, |item: &ChecklistItem| item.id, dragged, target)
}

/// Append a new group with `creator` as its only admin; returns the new id
pub fn store_add_group(store: &AppStore, name: &str, description: &str, creator: Member) -> u32 {
    let field = store.groups();
    let mut groups = field.write();
    let id = filter::next_id(groups.as_slice(), |g| g.id);
    groups.push(Group {
        id,
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        members: vec![creator],
        checklists: 0,
        items: 0,
        progress: 0,
    });
    id
}

/// Validate `draft` and append it under the next free id
pub fn store_add_order(store: &AppStore, draft: OrderDraft, today: NaiveDate, ordered_by: Person) -> Result<u32, DraftError> {
    let field = store.orders();
    let mut orders = field.write();
    let id = filter::next_id(orders.as_slice(), |o| o.id);
    orders.push(draft.into_order(id, today, ordered_by)?);
    Ok(id)
}

pub fn store_add_item(store: &AppStore, draft: ItemDraft) -> Result<u32, DraftError> {
    let field = store.checklist();
    let mut items = field.write();
    let id = filter::next_id(items.as_slice(), |i| i.id);
    let item = draft.into_item(id, items.as_slice())?;
    items.push(item);
    Ok(id)
}

pub fn store_remove_item(store: &AppStore, id: u32) -> bool {
    let field = store.checklist();
    let mut items = field.write();
    drafts::remove_item(&mut items, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_dragdrop::DropTarget;

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::new())));
    }

    fn checklist_ids(store: &AppStore) -> Vec<u32> {
        store.checklist().with_untracked(|items| items.iter().map(|i| i.id).collect())
    }

    fn admin() -> Member {
        Member {
            id: 1,
            name: "Alex".to_string(),
            initials: "AJ".to_string(),
            online: true,
            role: crate::models::Role::Admin,
        }
    }

    #[test]
    fn test_reorder_writes_through_store() {
        with_store(|store| {
            let before = checklist_ids(&store);
            let (first, third) = (before[0], before[2]);
            assert!(store_reorder_checklist(&store, first, DropTarget::End));
            let after = checklist_ids(&store);
            assert_eq!(after.last(), Some(&first));
            assert_eq!(after.len(), before.len());

            assert!(store_reorder_checklist(&store, first, DropTarget::Row(third)));
            let after = checklist_ids(&store);
            let at = |id| after.iter().position(|x| *x == id).unwrap();
            assert_eq!(at(first) + 1, at(third));
        });
    }

    #[test]
    fn test_add_group_takes_next_id() {
        with_store(|store| {
            let max = store.groups().with_untracked(|g| g.iter().map(|g| g.id).max().unwrap());
            let id = store_add_group(&store, "  Ski Trip ", " Winter ", admin());
            assert_eq!(id, max + 1);
            let added = store.groups().with_untracked(|g| g.last().cloned().unwrap());
            assert_eq!(added.name, "Ski Trip");
            assert_eq!(added.description, "Winter");
            assert_eq!(added.members, vec![admin()]);
        });
    }

    #[test]
    fn test_add_order_appends_ordered_row() {
        with_store(|store| {
            let count = store.orders().with_untracked(Vec::len);
            let today = NaiveDate::from_ymd_opt(2023, 8, 5).unwrap();
            let draft = OrderDraft {
                item: "Water Filter".into(),
                group: "Camping Trip".into(),
                price: "35".into(),
                ..Default::default()
            };
            let id = store_add_order(&store, draft, today, Person::new("Alex Johnson", "AJ")).unwrap();
            let orders = store.orders().get_untracked();
            assert_eq!(orders.len(), count + 1);
            let added = orders.last().unwrap();
            assert_eq!(added.id, id);
            assert_eq!(added.status, OrderStatus::Ordered);
            assert_eq!(added.ordered_date, "2023-08-05");
        });
    }

    #[test]
    fn test_rejected_order_leaves_store_alone() {
        with_store(|store| {
            let before = store.orders().get_untracked();
            let today = NaiveDate::from_ymd_opt(2023, 8, 5).unwrap();
            let result = store_add_order(&store, OrderDraft::default(), today, Person::new("A", "A"));
            assert_eq!(result, Err(DraftError::MissingName));
            assert_eq!(store.orders().get_untracked(), before);
        });
    }

    #[test]
    fn test_add_then_remove_item() {
        with_store(|store| {
            let before = checklist_ids(&store);
            let draft = ItemDraft {
                title: "First Aid Kit".into(),
                category: "Safety".into(),
                ..Default::default()
            };
            let id = store_add_item(&store, draft).unwrap();
            assert!(!before.contains(&id));
            assert_eq!(checklist_ids(&store).last(), Some(&id));

            assert!(store_remove_item(&store, id));
            assert_eq!(checklist_ids(&store), before);
            assert!(!store_remove_item(&store, id));
        });
    }
}
