use serde::{Deserialize, Serialize};

/// A menu item as returned by the proxy api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItem {
    pub menu_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

impl MenuItem {
    /// Table cells in column order: Name, Description, Price, Available
    pub fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.description.clone(),
            format_price(self.price),
            if self.available { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Body of `POST /menu-items`, the id is assigned by the proxy api
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

impl Default for MenuItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            available: true,
        }
    }
}

impl MenuItemDraft {
    /// name and description are required form fields
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Parses a raw price input, anything below zero or unparsable becomes 0.
pub(crate) fn clamp_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => price,
        _ => 0.0,
    }
}

pub(crate) fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
