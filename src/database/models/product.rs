use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Missing JSON fields fall back to their zero values, so partial
// snapshots inside an order body still decode.
#[derive(Clone, Debug, Default, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub specifications: String,
    pub quantity: i32,
    pub is_favorite: bool,
    pub in_cart: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_stay_snake_case() {
        let product = Product {
            id: 1,
            image_url: "http://example.com/a.png".to_string(),
            is_favorite: true,
            in_cart: true,
            ..Product::default()
        };
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["image_url"], "http://example.com/a.png");
        assert_eq!(json["is_favorite"], true);
        assert_eq!(json["in_cart"], true);
        assert_eq!(json["specifications"], "");
    }

    #[test]
    fn missing_fields_default_on_decode() {
        let product: Product =
            serde_json::from_str(r#"{"id": 5, "name": "mug", "price": 9.5}"#).unwrap();

        assert_eq!(product.id, 5);
        assert_eq!(product.name, "mug");
        assert_eq!(product.price, 9.5);
        assert_eq!(product.quantity, 0);
        assert!(!product.in_cart);
    }
}
