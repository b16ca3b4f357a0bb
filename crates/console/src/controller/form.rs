use shared::errors::FormError;
use validator::Validate;

use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use crate::domain::response::product::ProductResponse;

/// Raw text as typed into the form fields. Nothing here is parsed or
/// validated until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl ProductDraft {
    pub fn from_product(product: &ProductResponse) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Coerces the draft into typed values, then runs the field rules.
    /// The draft itself is untouched, so a failed submit keeps what the
    /// user typed.
    pub fn validate(&self) -> Result<ProductInput, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidPrice(self.price.clone()))?;
        if !price.is_finite() {
            return Err(FormError::InvalidPrice(self.price.clone()));
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidQuantity(self.quantity.clone()))?;

        let input = ProductInput {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price,
            quantity,
        };

        input.as_create_request().validate()?;

        Ok(input)
    }
}

/// A draft that survived validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl ProductInput {
    pub fn as_create_request(&self) -> CreateProductRequest {
        CreateProductRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }

    pub fn as_update_request(&self, id: i64) -> UpdateProductRequest {
        UpdateProductRequest {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, quantity: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "desc".to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn valid_draft_coerces_into_typed_input() {
        let input = draft("Widget", " 9.99 ", "5").validate().unwrap();

        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, 9.99);
        assert_eq!(input.quantity, 5);
    }

    #[test]
    fn non_numeric_price_is_rejected_with_raw_text() {
        let err = draft("Widget", "abc", "5").validate().unwrap_err();

        assert_eq!(err, FormError::InvalidPrice("abc".to_string()));
        assert_eq!(err.to_string(), "Price must be a number, got 'abc'");
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let err = draft("Widget", "9.99", "2.5").validate().unwrap_err();

        assert_eq!(err, FormError::InvalidQuantity("2.5".to_string()));
    }

    #[test]
    fn empty_name_fails_field_rules() {
        let err = draft("", "9.99", "5").validate().unwrap_err();

        assert_eq!(
            err,
            FormError::Validation(vec!["Name is required".to_string()])
        );
    }

    #[test]
    fn negative_price_fails_field_rules() {
        let err = draft("Widget", "-1", "5").validate().unwrap_err();

        assert_eq!(
            err,
            FormError::Validation(vec!["Price cannot be negative".to_string()])
        );
    }

    #[test]
    fn negative_quantity_fails_field_rules() {
        let err = draft("Widget", "9.99", "-2").validate().unwrap_err();

        assert_eq!(
            err,
            FormError::Validation(vec!["Quantity cannot be negative".to_string()])
        );
    }

    #[test]
    fn whitespace_only_name_fails_field_rules() {
        let err = draft("   ", "9.99", "5").validate().unwrap_err();

        assert_eq!(
            err,
            FormError::Validation(vec!["Name is required".to_string()])
        );
    }

    #[test]
    fn from_product_round_trips_through_validate() {
        let product = ProductResponse {
            id: 7,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            quantity: 5,
        };

        let draft = ProductDraft::from_product(&product);
        let input = draft.validate().unwrap();

        assert_eq!(input.name, product.name);
        assert_eq!(input.price, product.price);
        assert_eq!(input.quantity, product.quantity);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut draft = draft("Widget", "9.99", "5");
        draft.clear();

        assert_eq!(draft, ProductDraft::default());
    }
}
