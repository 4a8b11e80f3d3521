//! Domain Entities
//!
//! `Receipt` and `ReceiptItem` are only obtainable through their `parse`
//! factories, so every instance in the system has passed validation.

use crate::domain::validation::{ItemValidationError, ValidationError};
use crate::domain::value_objects::{Money, PurchaseDate, PurchaseTime};

/// Unvalidated line item as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub short_description: String,
    pub price: String,
}

/// Unvalidated receipt as received from a client
///
/// Missing JSON fields arrive here as empty strings / an empty list, so
/// they are reported by the validator like any other empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptDraft {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemDraft>,
    pub total: String,
}

/// A validated line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    short_description: String,
    price: Money,
}

impl ReceiptItem {
    pub fn parse(short_description: &str, price: &str) -> Result<Self, ItemValidationError> {
        if short_description.trim().is_empty() {
            return Err(ItemValidationError::DescriptionRequired);
        }

        let price = Money::parse(price).ok_or_else(|| ItemValidationError::InvalidPrice {
            description: short_description.to_string(),
        })?;

        Ok(Self {
            short_description: short_description.to_string(),
            price,
        })
    }

    /// Character count of the description without surrounding whitespace
    pub fn trimmed_description_length(&self) -> usize {
        self.short_description.trim().chars().count()
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// A validated receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: PurchaseDate,
    purchase_time: PurchaseTime,
    items: Vec<ReceiptItem>,
    total: Money,
}

impl Receipt {
    /// Validate a draft and build the receipt, or report the first
    /// violated rule. Checks run in the order retailer, purchaseDate,
    /// total, purchaseTime, items.
    pub fn parse(draft: &ReceiptDraft) -> Result<Self, ValidationError> {
        if draft.retailer.trim().is_empty() {
            return Err(ValidationError::RetailerRequired);
        }

        if draft.purchase_date.is_empty() {
            return Err(ValidationError::PurchaseDateRequired);
        }
        let purchase_date =
            PurchaseDate::parse(&draft.purchase_date).ok_or(ValidationError::InvalidPurchaseDate)?;

        if draft.total.is_empty() {
            return Err(ValidationError::TotalRequired);
        }
        let total = Money::parse(&draft.total).ok_or(ValidationError::InvalidTotal)?;

        if draft.purchase_time.is_empty() {
            return Err(ValidationError::PurchaseTimeRequired);
        }
        let purchase_time =
            PurchaseTime::parse(&draft.purchase_time).ok_or(ValidationError::InvalidPurchaseTime)?;

        if draft.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        let items = draft
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ReceiptItem::parse(&item.short_description, &item.price)
                    .map_err(|source| ValidationError::Item { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retailer: draft.retailer.clone(),
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> PurchaseDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> PurchaseTime {
        self.purchase_time
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn item(description: &str, price: &str) -> ItemDraft {
        ItemDraft {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    /// A valid draft that earns nothing beyond the retailer name
    pub fn draft() -> ReceiptDraft {
        ReceiptDraft {
            retailer: "Target".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![item("Pepsi", "1.26")],
            total: "1.26".to_string(),
        }
    }
}
