use serde::{Deserialize, Serialize};

/// An order as returned by the proxy api, `status` is assigned by the proxy api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub order_id: i64,
    pub table_number: u32,
    /// menu item name, not a reference to `MenuItem::menu_id`
    pub menu_item: String,
    pub quantity: u32,
    pub status: String,
}

impl Order {
    /// Table cells in column order: Order ID, Table Number, Menu Item, Quantity, Status
    pub fn cells(&self) -> [String; 5] {
        [
            self.order_id.to_string(),
            self.table_number.to_string(),
            self.menu_item.clone(),
            self.quantity.to_string(),
            self.status.clone(),
        ]
    }
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDraft {
    pub table_number: u32,
    pub menu_item: String,
    pub quantity: u32,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            table_number: 1,
            menu_item: String::new(),
            quantity: 1,
        }
    }
}

impl OrderDraft {
    /// the menu selector has a required empty placeholder
    pub fn is_complete(&self) -> bool {
        !self.menu_item.is_empty()
    }
}

/// Parses a raw count input (table number, quantity), clamped to at least 1.
pub(crate) fn clamp_count(raw: &str) -> u32 {
    let raw = raw.trim();
    let parsed = raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    });
    match parsed {
        Some(v) if v >= 1 => u32::try_from(v).unwrap_or(u32::MAX),
        _ => 1,
    }
}
