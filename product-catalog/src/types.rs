//! Product records held by the catalog

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a cess levy is charged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CessType {
    /// No cess
    #[default]
    None,
    /// Percentage of value
    Value,
    /// Fixed amount per unit
    Quantity,
    /// Both of the above
    ValueAndQuantity,
}

/// Restocking urgency, computed by whoever builds the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    /// Stock is fine
    #[default]
    Normal,
    /// Approaching minimum
    Low,
    /// At or below minimum
    Critical,
}

/// An inventory item.
///
/// `id` uniqueness is the caller's business; the catalog stores whatever it
/// is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Caller-assigned identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Image URL
    pub image: String,

    /// HSN classification code
    pub hsn_code: String,

    /// Barcode contents
    pub barcode: String,

    /// Supplier name
    pub supplier: String,

    /// Storage location
    pub location: String,

    /// Unit stock is counted in
    pub primary_unit: String,

    /// Alternate unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_unit: Option<String>,

    /// Batch or lot number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,

    /// Units on hand
    pub current_stock: u32,

    /// Reorder threshold
    pub min_stock_level: u32,

    /// Stocking ceiling
    pub max_stock_level: u32,

    /// Purchase price per unit
    pub unit_price: Decimal,

    /// Selling price per unit
    pub sales_price: Decimal,

    /// Value of stock on hand
    pub stock_value: Decimal,

    /// GST rate, percent
    pub tax_rate: Decimal,

    /// Cess charging mode
    #[serde(default)]
    pub cess_type: CessType,

    /// Cess rate, percent
    #[serde(default)]
    pub cess_rate: Decimal,

    /// Cess per unit
    #[serde(default)]
    pub cess_amount: Decimal,

    /// Unit the per-unit cess applies to
    #[serde(default)]
    pub cess_unit: String,

    /// Restocking urgency
    pub urgency_level: UrgencyLevel,

    /// Last restock time
    pub last_restocked: DateTime<Utc>,
}

impl Product {
    /// Create a product with an id and name; everything else defaulted
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_restocked: Utc::now(),
            ..Default::default()
        }
    }

    /// Whether `query` hits this product.
    ///
    /// Name, category and supplier compare case-insensitively; HSN code and
    /// barcode are codes and compare exactly.
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();

        self.name.to_lowercase().contains(&lowered)
            || self.category.to_lowercase().contains(&lowered)
            || self.supplier.to_lowercase().contains(&lowered)
            || self.hsn_code.contains(query)
            || self.barcode.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fields_case_insensitive() {
        let mut product = Product::new("p1", "iPhone 14");
        product.category = "Electronics".to_string();
        product.supplier = "Apple Distributors".to_string();

        assert!(product.matches("iphone"));
        assert!(product.matches("ELECTRON"));
        assert!(product.matches("apple dist"));
        assert!(!product.matches("samsung"));
    }

    #[test]
    fn test_codes_case_sensitive() {
        let mut product = Product::new("p1", "Widget");
        product.barcode = "123ABC".to_string();
        product.hsn_code = "8517x".to_string();

        assert!(product.matches("123ABC"));
        assert!(!product.matches("123abc"));
        assert!(product.matches("8517"));
        assert!(!product.matches("8517X"));
    }

    #[test]
    fn test_json_shape() {
        let mut product = Product::new("p1", "Rice 5kg");
        product.cess_type = CessType::ValueAndQuantity;
        product.urgency_level = UrgencyLevel::Critical;
        product.tax_rate = Decimal::new(5, 0);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["hsnCode"], "");
        assert_eq!(json["cessType"], "value_and_quantity");
        assert_eq!(json["urgencyLevel"], "critical");
        assert!(json.get("batchNumber").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_cess_fields_default_when_absent() {
        let json = serde_json::json!({
            "id": "p9",
            "name": "Soap",
            "category": "Personal Care",
            "image": "https://img.example/soap.png",
            "hsnCode": "3401",
            "barcode": "8901030",
            "supplier": "HUL",
            "location": "A-3",
            "primaryUnit": "pcs",
            "currentStock": 40,
            "minStockLevel": 10,
            "maxStockLevel": 200,
            "unitPrice": "18.50",
            "salesPrice": "25.00",
            "stockValue": "740.00",
            "taxRate": "18",
            "urgencyLevel": "normal",
            "lastRestocked": "2024-01-15T10:30:00Z"
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.cess_type, CessType::None);
        assert_eq!(product.cess_rate, Decimal::ZERO);
        assert!(product.cess_unit.is_empty());
        assert_eq!(product.secondary_unit, None);
    }
}
