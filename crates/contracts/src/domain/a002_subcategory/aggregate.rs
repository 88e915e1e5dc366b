use serde::{Deserialize, Serialize};

use crate::domain::a001_category::aggregate::{Category, CategoryId};

pub type SubcategoryId = i64;

/// Subcategory; always belongs to exactly one category.
///
/// The backend nests the owning category as a full object under `idCategory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "idSubcategory")]
    pub id: SubcategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "idCategory")]
    pub category: Category,
}

impl Subcategory {
    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }
}

/// Body of create/update requests for a subcategory.
///
/// Carries the resolved category object, not just its id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryPayload {
    pub name: String,
    pub description: String,
    #[serde(rename = "idCategory")]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_category_is_parsed() {
        let json = r#"{
            "idSubcategory": 7,
            "name": "Gaseosas",
            "description": "Con gas",
            "idCategory": {"idCategory": 2, "name": "Bebidas", "description": ""}
        }"#;
        let sub: Subcategory = serde_json::from_str(json).unwrap();
        assert_eq!(sub.id, 7);
        assert_eq!(sub.category_id(), 2);
        assert_eq!(sub.category.name, "Bebidas");
    }

    #[test]
    fn test_payload_without_category_serializes_null() {
        let payload = SubcategoryPayload {
            name: "x".into(),
            description: "y".into(),
            category: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["idCategory"].is_null());
    }
}
