//! Response Normalizer
//!
//! The POS response schema is not contractually stable. A pure detector
//! inspects structural markers and picks one of five parsing strategies;
//! every strategy yields the same canonical [`MenuItem`].
//!
//! Field values follow "first truthy alias wins": `null`, `false`, `0` and
//! blank strings are skipped in favour of the next alias.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ShapeError;
use crate::model::{ItemId, MenuItem, Price, OTHER_CATEGORY};

/// Keys under which a category object nests its item list
const NESTED_ITEM_KEYS: &[&str] = &["items", "menu_items", "products"];

const DESCRIPTION_KEYS: &[&str] = &["description", "item_description"];
const PRICE_KEYS: &[&str] = &["price", "item_price", "selling_price"];
const ID_KEYS: &[&str] = &["id", "item_id", "product_id"];
/// Name of a category entry in a bare category list
const CATEGORY_TITLE_KEYS: &[&str] = &["name", "category_name", "title"];

/// Per-strategy alias order for the fields where the POS layouts disagree
struct FieldAliases {
    name: &'static [&'static str],
    default_name: &'static str,
    image: &'static [&'static str],
}

/// Layouts where items are grouped under a category
const GROUPED: FieldAliases = FieldAliases {
    name: &["title", "name", "item_name"],
    default_name: "Unknown Item",
    image: &["image_url", "image", "item_image", "photo_url"],
};

/// Layouts where items arrive as one flat list
const FLAT: FieldAliases = FieldAliases {
    name: &["name", "item_name", "title"],
    default_name: "Unnamed Item",
    image: &["image", "image_url", "item_image", "photo_url"],
};

/// Category label extractors for flat items, tried in order
const ITEM_CATEGORY: &[fn(&Map<String, Value>) -> Option<String>] =
    &[category_field, category_name_field, category_camel_field];

/// The recognized response layouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseShape<'a> {
    /// `{ data: { "Burgers": [...], "Wraps": { items: [...] } } }`
    CategorizedMap(&'a Map<String, Value>),
    /// `{ data: [...] }`
    FlatData(&'a [Value]),
    /// `[ { name, items: [...] }, ... ]`
    CategoryList(&'a [Value]),
    /// `[ { name, price }, ... ]`
    BareItems(&'a [Value]),
    /// `{ items: [...] }`
    ItemsKey(&'a [Value]),
}

impl ResponseShape<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ResponseShape::CategorizedMap(_) => "categorized-map",
            ResponseShape::FlatData(_) => "flat-data",
            ResponseShape::CategoryList(_) => "category-list",
            ResponseShape::BareItems(_) => "bare-items",
            ResponseShape::ItemsKey(_) => "items-key",
        }
    }
}

/// Pick the parsing strategy for `raw`, or `None` if nothing matches
pub fn detect_shape(raw: &Value) -> Option<ResponseShape<'_>> {
    if let Some(Value::Object(categories)) = raw.get("data") {
        return Some(ResponseShape::CategorizedMap(categories));
    }
    if let Value::Array(entries) = raw {
        let nests_items = entries
            .first()
            .map_or(false, |first| NESTED_ITEM_KEYS.iter().any(|key| first.get(*key).map_or(false, is_truthy)));
        return Some(if nests_items {
            ResponseShape::CategoryList(entries)
        } else {
            ResponseShape::BareItems(entries)
        });
    }
    if let Some(Value::Array(items)) = raw.get("data") {
        return Some(ResponseShape::FlatData(items));
    }
    if let Some(Value::Array(items)) = raw.get("items") {
        return Some(ResponseShape::ItemsKey(items));
    }
    None
}

/// Convert a raw POS response into canonical menu items
pub fn normalize(raw: &Value) -> Result<Vec<MenuItem>, ShapeError> {
    let shape = detect_shape(raw).ok_or(ShapeError::NoMenuItems)?;
    debug!(shape = shape.name(), "detected menu response shape");

    let mut items = Vec::new();
    match shape {
        ResponseShape::CategorizedMap(categories) => {
            for (name, entry) in categories {
                let entries = match entry {
                    Value::Array(entries) => entries.as_slice(),
                    Value::Object(group) => nested_items(group),
                    _ => continue,
                };
                push_grouped(entries, &category_label(name), &mut items);
            }
        }
        ResponseShape::CategoryList(groups) => {
            for group in groups.iter().filter_map(Value::as_object) {
                let name = first_of(group, CATEGORY_TITLE_KEYS, as_text)
                    .unwrap_or_else(|| OTHER_CATEGORY.to_string());
                push_grouped(nested_items(group), &name, &mut items);
            }
        }
        ResponseShape::FlatData(entries)
        | ResponseShape::BareItems(entries)
        | ResponseShape::ItemsKey(entries) => {
            items.extend(entries.iter().filter_map(Value::as_object).map(|raw| {
                let category = ITEM_CATEGORY
                    .iter()
                    .find_map(|extract| extract(raw))
                    .unwrap_or_else(|| OTHER_CATEGORY.to_string());
                canonical_item(raw, &FLAT, category)
            }));
        }
    }

    if items.is_empty() {
        return Err(ShapeError::NoMenuItems);
    }
    Ok(items)
}

fn push_grouped(entries: &[Value], category: &str, out: &mut Vec<MenuItem>) {
    out.extend(
        entries
            .iter()
            .filter_map(Value::as_object)
            .map(|raw| canonical_item(raw, &GROUPED, category.to_string())),
    );
}

/// First array found under the conventional nesting keys
fn nested_items(group: &Map<String, Value>) -> &[Value] {
    NESTED_ITEM_KEYS
        .iter()
        .find_map(|key| group.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn canonical_item(raw: &Map<String, Value>, aliases: &FieldAliases, category: String) -> MenuItem {
    MenuItem {
        id: first_of(raw, ID_KEYS, as_id),
        name: first_of(raw, aliases.name, as_text).unwrap_or_else(|| aliases.default_name.to_string()),
        description: first_of(raw, DESCRIPTION_KEYS, as_text)
            .map(clean_description)
            .unwrap_or_default(),
        price: first_of(raw, PRICE_KEYS, as_price).unwrap_or_default(),
        image: first_of(raw, aliases.image, as_text).unwrap_or_default(),
        category,
    }
}

/// Apply `extract` to each alias in order; the first success wins
fn first_of<T>(raw: &Map<String, Value>, keys: &[&str], extract: fn(&Value) -> Option<T>) -> Option<T> {
    keys.iter().find_map(|key| raw.get(*key).and_then(extract))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) if is_truthy(value) => Some(n.to_string()),
        _ => None,
    }
}

fn as_price(value: &Value) -> Option<Price> {
    match value {
        Value::Number(n) if is_truthy(value) => Some(Price::Number(n.clone())),
        Value::String(s) if !s.trim().is_empty() => Some(Price::Text(s.clone())),
        _ => None,
    }
}

fn as_id(value: &Value) -> Option<ItemId> {
    match value {
        Value::Number(n) if is_truthy(value) => Some(ItemId::Number(n.clone())),
        Value::String(s) if !s.is_empty() => Some(ItemId::Text(s.clone())),
        _ => None,
    }
}

/// Trimmed description; placeholder strings leaked by the POS count as empty
fn clean_description(text: String) -> String {
    match text.trim() {
        "null" | "undefined" => String::new(),
        trimmed => trimmed.to_string(),
    }
}

fn category_label(name: &str) -> String {
    if name.trim().is_empty() {
        OTHER_CATEGORY.to_string()
    } else {
        name.to_string()
    }
}

/// `category` as a plain label or as `{ name }`
fn category_field(raw: &Map<String, Value>) -> Option<String> {
    match raw.get("category")? {
        Value::Object(category) => category.get("name").and_then(as_text),
        other => as_text(other),
    }
}

fn category_name_field(raw: &Map<String, Value>) -> Option<String> {
    raw.get("category_name").and_then(as_text)
}

fn category_camel_field(raw: &Map<String, Value>) -> Option<String> {
    raw.get("categoryName").and_then(as_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cheese_burger_scenario() {
        let raw = json!({ "data": { "Burgers": [{ "title": "Cheese Burger", "price": "5.50" }] } });
        let items = normalize(&raw).unwrap();
        assert_eq!(
            items,
            vec![MenuItem {
                id: None,
                name: "Cheese Burger".to_string(),
                description: String::new(),
                price: Price::Text("5.50".to_string()),
                image: String::new(),
                category: "Burgers".to_string(),
            }]
        );
    }

    #[test]
    fn test_categorized_map_with_nested_objects() {
        let raw = json!({
            "data": {
                "Wraps": { "menu_items": [{ "item_name": "Chicken Wrap", "item_price": 6 }] },
                "Sides": { "products": [{ "name": "Fries", "selling_price": 2.5, "image": "fries.jpg" }] },
                "Broken": "not a list"
            }
        });
        let items = normalize(&raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Chicken Wrap");
        assert_eq!(items[0].category, "Wraps");
        assert_eq!(items[0].price, Price::Number(6.into()));
        assert_eq!(items[1].category, "Sides");
        assert_eq!(items[1].image, "fries.jpg");
    }

    #[test]
    fn test_grouped_alias_order_prefers_title_and_image_url() {
        let raw = json!({ "data": { "Deals": [{
            "title": "Family Deal", "name": "deal_01",
            "image": "small.png", "image_url": "large.png",
            "product_id": "p-7"
        }] } });
        let item = &normalize(&raw).unwrap()[0];
        assert_eq!(item.name, "Family Deal");
        assert_eq!(item.image, "large.png");
        assert_eq!(item.id, Some(ItemId::Text("p-7".to_string())));
    }

    #[test]
    fn test_flat_data_derives_category_per_item() {
        let raw = json!({ "data": [
            { "name": "Cola", "category": "Drinks", "id": 3 },
            { "name": "Brownie", "category": { "name": "Desserts" } },
            { "item_name": "Hot Wings", "category_name": "Chicken" },
            { "title": "Mystery", "categoryName": "Specials" },
            { "price": 0 }
        ] });
        let items = normalize(&raw).unwrap();
        let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, ["Drinks", "Desserts", "Chicken", "Specials", "Other"]);
        assert_eq!(items[0].id, Some(ItemId::Number(3.into())));
        assert_eq!(items[4].name, "Unnamed Item");
        assert_eq!(items[4].price, Price::default());
    }

    #[test]
    fn test_category_list() {
        let raw = json!([
            { "name": "Burgers", "items": [{ "title": "Zinger" }, { "title": "Classic" }] },
            { "category_name": "Wraps", "products": [{ "name": "Falafel Wrap" }] },
            { "items": [{ "title": "Loose" }] }
        ]);
        assert!(matches!(detect_shape(&raw), Some(ResponseShape::CategoryList(_))));
        let items = normalize(&raw).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].category, "Burgers");
        assert_eq!(items[2].category, "Wraps");
        assert_eq!(items[3].category, "Other");
    }

    #[test]
    fn test_bare_items_and_items_key() {
        let bare = json!([{ "name": "Milkshake", "category": "Drinks" }]);
        assert!(matches!(detect_shape(&bare), Some(ResponseShape::BareItems(_))));
        assert_eq!(normalize(&bare).unwrap()[0].category, "Drinks");

        let keyed = json!({ "items": [{ "name": "Nuggets" }] });
        assert!(matches!(detect_shape(&keyed), Some(ResponseShape::ItemsKey(_))));
        assert_eq!(normalize(&keyed).unwrap()[0].category, "Other");
    }

    #[test]
    fn test_falsy_values_fall_through_aliases() {
        let raw = json!({ "items": [{
            "name": "", "item_name": null, "title": "Onion Rings",
            "price": 0, "item_price": "", "selling_price": "1.99",
            "description": "   ", "item_description": "Crispy"
        }] });
        let item = &normalize(&raw).unwrap()[0];
        assert_eq!(item.name, "Onion Rings");
        assert_eq!(item.price, Price::Text("1.99".to_string()));
        assert_eq!(item.description, "Crispy");
    }

    #[test]
    fn test_placeholder_description_is_empty() {
        let raw = json!({ "items": [{ "name": "Tea", "description": " null " }] });
        assert_eq!(normalize(&raw).unwrap()[0].description, "");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let raw = json!({ "data": { "Burgers": [null, 7, { "title": "Double" }] } });
        let items = normalize(&raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Double");
    }

    #[test]
    fn test_empty_category_key_becomes_other() {
        let raw = json!({ "data": { "": [{ "title": "Orphan" }] } });
        assert_eq!(normalize(&raw).unwrap()[0].category, OTHER_CATEGORY);
    }

    #[test]
    fn test_unrecognized_and_empty_shapes_fail() {
        for raw in [
            json!({ "data": [] }),
            json!({ "data": {} }),
            json!([]),
            json!({ "menu": [{ "name": "x" }] }),
            json!("burgers"),
            json!(null),
            json!({ "data": "oops" }),
            json!({ "data": { "Burgers": { "nothing": [] } } }),
        ] {
            assert_eq!(normalize(&raw), Err(ShapeError::NoMenuItems), "raw = {raw}");
        }
        assert_eq!(ShapeError::NoMenuItems.to_string(), "no menu items found");
    }

    #[test]
    fn test_data_string_falls_back_to_items_key() {
        let raw = json!({ "data": "v2", "items": [{ "name": "Wrap" }] });
        assert_eq!(detect_shape(&raw).map(|s| s.name()), Some("items-key"));
    }
}
