//! Pickup Request Flow
//!
//! Two-step form state, charges, and the JSON payload handed to the
//! success page through the `data` query parameter.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const DELIVERY_CHARGE: u32 = 50;
pub const ITEM_CHARGE: u32 = 100;

// ========================
// Form State
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "itemname")]
    pub item_name: String,
    #[serde(rename = "itemDescription")]
    pub item_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    Name,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Contact,
    Shipment,
}

impl FormStep {
    pub const COUNT: usize = 2;

    pub fn index(&self) -> usize {
        match self {
            FormStep::Contact => 0,
            FormStep::Shipment => 1,
        }
    }

    pub fn next(self) -> Self {
        FormStep::Shipment
    }

    pub fn prev(self) -> Self {
        FormStep::Contact
    }

    pub fn is_last(&self) -> bool {
        *self == FormStep::Shipment
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub id_proof: String,
    pub priority: String,
    pub items: Vec<LineItem>,
}

impl Default for PickupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            pickup_address: String::new(),
            delivery_address: String::new(),
            id_proof: String::new(),
            priority: String::new(),
            items: vec![LineItem::default()],
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl PickupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self) {
        self.items.push(LineItem::default());
    }

    /// Keeps at least one line; returns whether a line was removed
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn set_item_field(&mut self, index: usize, field: LineField, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            match field {
                LineField::Name => item.item_name = value,
                LineField::Description => item.item_description = value,
            }
        }
    }

    pub fn step_complete(&self, step: FormStep) -> bool {
        match step {
            FormStep::Contact => filled(&self.name) && filled(&self.email) && filled(&self.phone),
            FormStep::Shipment => {
                filled(&self.delivery_address)
                    && filled(&self.priority)
                    && self
                        .items
                        .iter()
                        .all(|i| filled(&i.item_name) && filled(&i.item_description))
            }
        }
    }

    pub fn charges(&self) -> Charges {
        Charges::for_items(self.items.len())
    }

    pub fn submit(&self, selected_mode: Option<String>) -> PickupRequest {
        let charges = self.charges();
        PickupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            pickup_address: self.pickup_address.clone(),
            delivery_address: self.delivery_address.clone(),
            id_proof: self.id_proof.clone(),
            priority: self.priority.clone(),
            items: self.items.clone(),
            selected_mode,
            delivery_charge: charges.delivery,
            item_charge: charges.items,
            total_amount: charges.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charges {
    pub delivery: u32,
    pub items: u32,
    pub total: u32,
}

impl Charges {
    pub fn for_items(count: usize) -> Self {
        let items = ITEM_CHARGE * count as u32;
        Self {
            delivery: DELIVERY_CHARGE,
            items,
            total: DELIVERY_CHARGE + items,
        }
    }
}

// ========================
// Query Payload
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub pickup_address: String,
    pub delivery_address: String,
    #[serde(default)]
    pub id_proof: String,
    pub priority: String,
    pub items: Vec<LineItem>,
    pub selected_mode: Option<String>,
    pub delivery_charge: u32,
    pub item_charge: u32,
    pub total_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Missing,
    Malformed(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Missing => write!(f, "no pickup details in the link"),
            QueryError::Malformed(detail) => write!(f, "pickup details are unreadable: {detail}"),
        }
    }
}

impl std::error::Error for QueryError {}

pub fn encode_query(request: &PickupRequest) -> String {
    // Serializing plain strings and integers cannot fail
    let json = serde_json::to_string(request).unwrap_or_default();
    utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string()
}

pub fn decode_query(raw: &str) -> Result<PickupRequest, QueryError> {
    if raw.trim().is_empty() {
        return Err(QueryError::Missing);
    }
    let json = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| QueryError::Malformed(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| QueryError::Malformed(e.to_string()))
}

/// `amount` query value; `None` when absent or not a finite number
pub fn parse_amount(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PickupForm {
        let mut form = PickupForm::new();
        form.name = "Priya Sharma".into();
        form.email = "priya@example.com".into();
        form.phone = "+91 98765 43210".into();
        form.pickup_address = "12 MG Road, Pune".into();
        form.delivery_address = "5 Park St & Lane #2, Kolkata".into();
        form.id_proof = "AADHAAR-1234".into();
        form.priority = "express".into();
        form.set_item_field(0, LineField::Name, "Books".into());
        form.set_item_field(0, LineField::Description, "Box of 20% off novels?".into());
        form.add_item();
        form.set_item_field(1, LineField::Name, "Lamp".into());
        form.set_item_field(1, LineField::Description, "Fragile = handle with care".into());
        form
    }

    #[test]
    fn test_new_form_has_one_empty_item() {
        let form = PickupForm::new();
        assert_eq!(form.items, vec![LineItem::default()]);
    }

    #[test]
    fn test_cannot_remove_last_item() {
        let mut form = PickupForm::new();
        assert!(!form.remove_item(0));
        form.add_item();
        assert!(form.remove_item(1));
        assert_eq!(form.items.len(), 1);
        assert!(!form.remove_item(5));
    }

    #[test]
    fn test_charges() {
        assert_eq!(Charges::for_items(1), Charges { delivery: 50, items: 100, total: 150 });
        assert_eq!(Charges::for_items(3).total, 350);
        assert_eq!(filled_form().submit(None).total_amount, 250);
    }

    #[test]
    fn test_step_completion() {
        let mut form = filled_form();
        assert!(form.step_complete(FormStep::Contact));
        assert!(form.step_complete(FormStep::Shipment));
        form.set_item_field(1, LineField::Description, "   ".into());
        assert!(!form.step_complete(FormStep::Shipment));
        form.email.clear();
        assert!(!form.step_complete(FormStep::Contact));
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(FormStep::Contact.prev(), FormStep::Contact);
        assert_eq!(FormStep::Contact.next().next(), FormStep::Shipment);
        assert!(FormStep::Shipment.is_last());
    }

    #[test]
    fn test_query_round_trip_preserves_values() {
        let form = filled_form();
        let request = form.submit(Some("Rail Transport".into()));
        let encoded = encode_query(&request);
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('"'));

        let decoded = decode_query(&encoded).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(decoded.name, form.name);
        assert_eq!(decoded.delivery_address, form.delivery_address);
        assert_eq!(decoded.items, form.items);
        assert_eq!(decoded.selected_mode.as_deref(), Some("Rail Transport"));
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let json = serde_json::to_value(filled_form().submit(None)).unwrap();
        assert_eq!(json["deliveryCharge"], 50);
        assert_eq!(json["items"][0]["itemname"], "Books");
        assert!(json["selectedMode"].is_null());
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode_query(""), Err(QueryError::Missing));
        assert!(matches!(decode_query("%7Bnope"), Err(QueryError::Malformed(_))));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("250")), Some(250.0));
        assert_eq!(parse_amount(Some("abc")), None);
        assert_eq!(parse_amount(Some("NaN")), None);
        assert_eq!(parse_amount(None), None);
    }
}
