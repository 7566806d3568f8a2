//! Canonical menu data structures.

use serde::{Deserialize, Serialize};

/// Category used when a raw item carries no usable category label
pub const OTHER_CATEGORY: &str = "Other";

/// Identifier as supplied by the POS; may be absent or duplicated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Price exactly as the POS sent it: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Number(serde_json::Number::from(0))
    }
}

impl Price {
    /// Numeric value, parsed leniently from the leading digits of text prices.
    /// Zero and unparsable prices yield `None`.
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            Price::Number(n) => n.as_f64()?,
            Price::Text(s) => parse_leading_number(s)?,
        };
        (value != 0.0 && value.is_finite()).then_some(value)
    }
}

/// Parse the longest numeric prefix of `text` ("5.50 GBP" -> 5.5)
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

/// Menu item normalized to the fixed field set regardless of source shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Option<ItemId>,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

impl MenuItem {
    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
