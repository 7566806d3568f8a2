//! Display Helpers
//!
//! Formatting for prices, category icons and category anchors.

use menu_pipeline::Price;

/// `£` with two decimals; `None` for zero or unparsable prices
pub fn format_price(price: &Price) -> Option<String> {
    price.amount().map(|amount| format!("£{:.2}", amount))
}

/// Font Awesome icon class picked by keywords in the category name
pub fn category_icon(category: &str) -> &'static str {
    let name = category.to_lowercase();
    let has = |keys: &[&str]| keys.iter().any(|key| name.contains(key));

    if has(&["burger"]) {
        "fa-hamburger"
    } else if has(&["wrap"]) {
        "fa-burrito"
    } else if has(&["chicken", "wing"]) {
        "fa-drumstick-bite"
    } else if has(&["fries", "side"]) {
        "fa-utensils"
    } else if has(&["drink", "beverage"]) {
        "fa-glass"
    } else if has(&["dessert", "sweet"]) {
        "fa-cookie-bite"
    } else if has(&["deal", "combo", "meal"]) {
        "fa-tags"
    } else {
        "fa-utensils"
    }
}

/// Heading id for a category section, e.g. "Hot Drinks" -> "category-hot-drinks"
pub fn category_anchor(category: &str) -> String {
    let slug = category.split_whitespace().collect::<Vec<_>>().join("-");
    format!("category-{}", slug.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Price::Text("5.5".into())).as_deref(), Some("£5.50"));
        assert_eq!(format_price(&Price::Number(12.into())).as_deref(), Some("£12.00"));
        assert_eq!(format_price(&Price::default()), None);
        assert_eq!(format_price(&Price::Text("TBC".into())), None);
    }

    #[test]
    fn test_category_icon() {
        assert_eq!(category_icon("Gourmet Burgers"), "fa-hamburger");
        assert_eq!(category_icon("WINGS"), "fa-drumstick-bite");
        assert_eq!(category_icon("Cold Drinks"), "fa-glass");
        assert_eq!(category_icon("Meal Deals"), "fa-tags");
        assert_eq!(category_icon("Other"), "fa-utensils");
    }

    #[test]
    fn test_category_anchor() {
        assert_eq!(category_anchor("Hot  Drinks"), "category-hot-drinks");
        assert_eq!(category_anchor("Burgers"), "category-burgers");
    }
}
