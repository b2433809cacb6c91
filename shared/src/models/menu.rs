//! Menu Model

use super::lenient_f64;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create menu item fields (sent as multipart, image attached separately)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Absolute URL or stored upload path; empty keeps no image
    pub image: String,
}

impl MenuItemUpdate {
    /// Start an edit from the current item
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
            image: item.image.clone().unwrap_or_default(),
        }
    }
}

/// Group items by category, categories in order of first appearance
pub fn group_by_category(items: &[MenuItem]) -> Vec<(&str, Vec<&MenuItem>)> {
    let mut groups: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category.as_str(), vec![item])),
        }
    }
    groups
}

/// Resolve a stored image reference to an absolute URL
///
/// Absolute `http(s)` URLs pass through. Anything else is served from
/// `host`, under `/uploads/` unless the path already starts there.
pub fn resolve_image_url(host: &str, image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    if image.starts_with("http") {
        return Some(image.to_string());
    }

    let host = host.trim_end_matches('/');
    if image.starts_with("/uploads") {
        Some(format!("{host}{image}"))
    } else {
        Some(format!("{host}/uploads/{}", image.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price: 10.0,
            category: category.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance() {
        let items = vec![
            item("1", "Coffee"),
            item("2", "Snacks"),
            item("3", "Coffee"),
            item("4", "Desserts"),
        ];
        let groups = group_by_category(&items);
        let names: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(names, ["Coffee", "Snacks", "Desserts"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].id, "3");
    }

    #[test]
    fn test_resolve_image_url() {
        let host = "https://cafe.example.com/";
        assert_eq!(resolve_image_url(host, ""), None);
        assert_eq!(
            resolve_image_url(host, "https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            resolve_image_url(host, "/uploads/a.png").as_deref(),
            Some("https://cafe.example.com/uploads/a.png")
        );
        assert_eq!(
            resolve_image_url(host, "a.png").as_deref(),
            Some("https://cafe.example.com/uploads/a.png")
        );
    }

    #[test]
    fn test_price_as_string() {
        let item: MenuItem = serde_json::from_value(serde_json::json!({
            "_id": "m1",
            "name": "Latte",
            "price": "120",
            "category": "Coffee"
        }))
        .unwrap();
        assert_eq!(item.price, 120.0);
        assert_eq!(item.description, "");
    }
}
