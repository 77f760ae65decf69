use serde::{Deserialize, Serialize};

/// Product record as served by the remote API.
///
/// Field names follow the remote JSON: the identifier arrives as `_id`,
/// the commission type flag as `commissionType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    /// Commission rate, percentage
    pub commission: f64,
    /// 0 or 1, toggles how the commission is interpreted.
    /// Not consumed by the update flow.
    #[serde(rename = "commissionType", default)]
    pub commission_type: u8,
    pub image: String,
}

/// Orders share the product shape for display purposes.
pub type Order = Product;

/// Body of `PATCH /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionUpdate {
    pub commission: f64,
}

/// Body of `PATCH /products/many`: one commission value applied to
/// every selected product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCommissionUpdate {
    #[serde(rename = "selectedResources")]
    pub selected_resources: Vec<String>,
    pub commission: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_remote_field_names() {
        let json = r#"{
            "_id": "p1",
            "name": "Keyboard",
            "category": "Electronics",
            "price": 49.9,
            "currency": "$",
            "commission": 5.0,
            "commissionType": 1,
            "image": "https://cdn.example.com/kb.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.commission, 5.0);
        assert_eq!(product.commission_type, 1);
    }

    #[test]
    fn test_product_commission_type_defaults_to_zero() {
        let json = r#"{
            "_id": "p2",
            "name": "Mouse",
            "category": "Electronics",
            "price": 19.0,
            "currency": "$",
            "commission": 3.5,
            "image": ""
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.commission_type, 0);
    }

    #[test]
    fn test_product_serializes_back_to_remote_field_names() {
        let product = Product {
            id: "p1".to_string(),
            name: "Keyboard".to_string(),
            category: "Electronics".to_string(),
            price: 49.9,
            currency: "$".to_string(),
            commission: 5.0,
            commission_type: 1,
            image: String::new(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "p1");
        assert_eq!(value["commissionType"], 1);
        assert!(value.get("commission_type").is_none());
    }

    #[test]
    fn test_bulk_update_payload_shape() {
        let body = BulkCommissionUpdate {
            selected_resources: vec!["p1".to_string(), "p2".to_string()],
            commission: 12.5,
        };

        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"selectedResources":["p1","p2"],"commission":12.5}"#);
    }
}
