//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{ItemDraft, ReceiptDraft};
use serde::{Deserialize, Serialize};

/// Request for POST /receipts/process
///
/// Absent and `null` fields both become empty so the validator reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ItemRequest>>,
    #[serde(default)]
    pub total: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl From<ItemRequest> for ItemDraft {
    fn from(req: ItemRequest) -> Self {
        Self {
            short_description: req.short_description.unwrap_or_default(),
            price: req.price.unwrap_or_default(),
        }
    }
}

impl From<ProcessReceiptRequest> for ReceiptDraft {
    fn from(req: ProcessReceiptRequest) -> Self {
        Self {
            retailer: req.retailer.unwrap_or_default(),
            purchase_date: req.purchase_date.unwrap_or_default(),
            purchase_time: req.purchase_time.unwrap_or_default(),
            items: req
                .items
                .unwrap_or_default()
                .into_iter()
                .map(ItemDraft::from)
                .collect(),
            total: req.total.unwrap_or_default(),
        }
    }
}

/// Response for POST /receipts/process
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Response for GET /receipts/{id}/points
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let req: ProcessReceiptRequest = serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}],
                "total": "1.25"
            }"#,
        )
        .unwrap();

        let draft = ReceiptDraft::from(req);
        assert_eq!(draft.purchase_date, "2022-01-01");
        assert_eq!(draft.items[0].short_description, "Pepsi - 12-oz");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let req: ProcessReceiptRequest =
            serde_json::from_str(r#"{"retailer": "Target", "items": [{}]}"#).unwrap();
        let draft = ReceiptDraft::from(req);
        assert!(draft.purchase_time.is_empty());
        assert!(draft.items[0].price.is_empty());
    }

    #[test]
    fn test_null_fields_become_empty() {
        let req: ProcessReceiptRequest = serde_json::from_str(
            r#"{"retailer": null, "total": null, "items": [{"shortDescription": null, "price": null}]}"#,
        )
        .unwrap();
        let draft = ReceiptDraft::from(req);
        assert!(draft.retailer.is_empty());
        assert!(draft.total.is_empty());
        assert!(draft.items[0].short_description.is_empty());

        let req: ProcessReceiptRequest = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(ReceiptDraft::from(req).items.is_empty());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let res = serde_json::from_str::<ProcessReceiptRequest>(r#"{"total": 35.35}"#);
        assert!(res.is_err());
    }
}
