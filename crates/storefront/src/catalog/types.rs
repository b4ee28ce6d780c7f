//! Catalog schema types.
//!
//! The remote catalog serves weakly-typed JSON records. Wire records are
//! decoded with strict field expectations and converted into domain values
//! at this boundary; a record that fails conversion is rejected rather than
//! carried through with undefined fields.

use greenbasket_cart::ProductRef;
use greenbasket_core::{CurrencyCode, Money, MoneyError, ProductId};
use serde::{Deserialize, Serialize};

/// Raw product record exactly as served by the catalog API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: RatingRecord,
}

/// Raw rating block of a [`ProductRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRecord {
    pub rate: f64,
    pub count: i64,
}

/// A catalog product after boundary validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque catalog key.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the storefront currency.
    pub price: Money,
    /// Long-form description.
    pub description: String,
    /// Catalog category name.
    pub category: String,
    /// Product image URL.
    pub image_url: String,
    /// Aggregate customer rating.
    pub rating: Rating,
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 4.5 on a 5-point scale).
    pub value: f64,
    /// Total number of ratings.
    pub count: i64,
}

impl Product {
    /// Validate a wire record into a domain product.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] when the record's price is negative or not
    /// a finite number.
    pub fn from_record(
        record: ProductRecord,
        currency_code: CurrencyCode,
    ) -> Result<Self, MoneyError> {
        Ok(Self {
            id: ProductId::from(record.id),
            title: record.title,
            price: Money::from_f64(record.price, currency_code)?,
            description: record.description,
            category: record.category,
            image_url: record.image,
            rating: Rating {
                value: record.rating.rate,
                count: record.rating.count,
            },
        })
    }

    /// The reference handed to the cart aggregator when this product is
    /// added to a cart.
    #[must_use]
    pub fn cart_ref(&self) -> ProductRef {
        ProductRef::new(self.id.clone(), self.title.clone(), self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    const WIRE_PRODUCT: &str = r#"{
        "id": 1,
        "title": "Fjallraven Backpack",
        "price": 109.95,
        "description": "Fits 15 inch laptops",
        "category": "men's clothing",
        "image": "https://catalog.test/img/81fPKd.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_decode_wire_record() {
        let record: ProductRecord = serde_json::from_str(WIRE_PRODUCT).unwrap();
        let product = Product::from_record(record, CurrencyCode::USD).unwrap();

        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.price.amount, Decimal::new(10995, 2));
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.image_url, "https://catalog.test/img/81fPKd.jpg");
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let result: Result<ProductRecord, _> =
            serde_json::from_str(r#"{"id": 1, "title": "No price"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_mistyped_price() {
        let result: Result<ProductRecord, _> = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Bad price",
                "price": "free",
                "description": "",
                "category": "misc",
                "image": "",
                "rating": { "rate": 0.0, "count": 0 }
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_record_rejects_negative_price() {
        let record = ProductRecord {
            id: 9,
            title: "Refund magnet".to_owned(),
            price: -4.5,
            description: String::new(),
            category: "misc".to_owned(),
            image: String::new(),
            rating: RatingRecord {
                rate: 1.0,
                count: 2,
            },
        };
        assert!(matches!(
            Product::from_record(record, CurrencyCode::USD),
            Err(MoneyError::Negative(_))
        ));
    }

    #[test]
    fn test_cart_ref_carries_id_title_price() {
        let record: ProductRecord = serde_json::from_str(WIRE_PRODUCT).unwrap();
        let product = Product::from_record(record, CurrencyCode::USD).unwrap();
        let cart_ref = product.cart_ref();

        assert_eq!(cart_ref.id, product.id);
        assert_eq!(cart_ref.title, product.title);
        assert_eq!(cart_ref.price, product.price);
    }
}
