//! Validation Errors
//!
//! Receipt validation fails fast: the first violated rule is reported,
//! in the order retailer, purchaseDate, total, purchaseTime, items.

use thiserror::Error;

/// A single line item failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    #[error("shortDescription is required.")]
    DescriptionRequired,

    #[error("ReceiptItem '{description}' has an invalid price.")]
    InvalidPrice { description: String },
}

/// The receipt payload failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Retailer name is required.")]
    RetailerRequired,

    #[error("purchaseDate is required.")]
    PurchaseDateRequired,

    #[error("purchaseDate must be in format 'YYYY-MM-DD'. Please verify input.")]
    InvalidPurchaseDate,

    #[error("total is required.")]
    TotalRequired,

    #[error("total must be in format 'X.XX'. Please verify input.")]
    InvalidTotal,

    #[error("purchaseTime is required.")]
    PurchaseTimeRequired,

    #[error("purchaseTime must be in format 'HH:MM' (24-hour). Please verify input.")]
    InvalidPurchaseTime,

    #[error("Invalid item data: No items in receipt.")]
    NoItems,

    /// Item at `index` (zero-based) was rejected
    #[error("Invalid item data: {source}")]
    Item {
        index: usize,
        #[source]
        source: ItemValidationError,
    },
}

impl ValidationError {
    /// Name of the offending JSON field
    pub fn field(&self) -> &'static str {
        match self {
            Self::RetailerRequired => "retailer",
            Self::PurchaseDateRequired | Self::InvalidPurchaseDate => "purchaseDate",
            Self::TotalRequired | Self::InvalidTotal => "total",
            Self::PurchaseTimeRequired | Self::InvalidPurchaseTime => "purchaseTime",
            Self::NoItems | Self::Item { .. } => "items",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_is_wrapped() {
        let err = ValidationError::Item {
            index: 1,
            source: ItemValidationError::InvalidPrice {
                description: "Dasani".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid item data: ReceiptItem 'Dasani' has an invalid price."
        );
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::RetailerRequired.to_string(),
            "Retailer name is required."
        );
        assert_eq!(
            ValidationError::NoItems.to_string(),
            "Invalid item data: No items in receipt."
        );
        assert!(
            ValidationError::InvalidPurchaseTime
                .to_string()
                .contains("24-hour")
        );
    }
}
