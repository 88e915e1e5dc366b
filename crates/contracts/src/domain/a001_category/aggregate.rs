use serde::{Deserialize, Serialize};

/// Backend identifier of a category
pub type CategoryId = i64;

/// Category of the catalog, owned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of create/update requests for a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_uses_backend_field_names() {
        let json = r#"{"idCategory":3,"name":"Bebidas","description":"Frías"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.name, "Bebidas");

        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["idCategory"], 3);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let category: Category = serde_json::from_str(r#"{"idCategory":1,"name":"A"}"#).unwrap();
        assert_eq!(category.description, "");
    }
}
