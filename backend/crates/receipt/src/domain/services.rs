//! Domain Services
//!
//! Pure points calculation. Every rule is additive and independent, and
//! all arithmetic is done in integer cents.

use crate::domain::entities::{Receipt, ReceiptItem};
use crate::domain::value_objects::{Money, PurchaseDate, PurchaseTime};

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

const QUARTER_CENTS: u64 = 25;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
/// `ceil(price * 0.2)` == `ceil(cents / 500)`
const DESCRIPTION_BONUS_CENTS_DIVISOR: u64 = 500;

/// 14:00 and 16:00 as minutes since midnight
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
const AFTERNOON_END_MINUTES: u32 = 16 * 60;

/// Points awarded by each rule for one receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer_name: retailer_name_points(receipt.retailer()),
            round_dollar_total: round_dollar_points(receipt.total()),
            quarter_multiple_total: quarter_multiple_points(receipt.total()),
            item_pairs: item_pair_points(receipt.items().len()),
            item_descriptions: receipt
                .items()
                .iter()
                .map(item_description_points)
                .fold(0u64, u64::saturating_add),
            odd_purchase_day: odd_day_points(receipt.purchase_date()),
            afternoon_purchase: afternoon_points(receipt.purchase_time()),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Total points for a validated receipt
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

/// One point per letter or digit in the retailer name
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of_cents(QUARTER_CENTS) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Five points for every complete pair of items
pub fn item_pair_points(item_count: usize) -> u64 {
    ((item_count / 2) as u64).saturating_mul(ITEM_PAIR_POINTS)
}

/// `ceil(price * 0.2)` when the trimmed description length is a
/// non-zero multiple of three
pub fn item_description_points(item: &ReceiptItem) -> u64 {
    let length = item.trimmed_description_length();
    if length == 0 || length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }
    item.price().cents().div_ceil(DESCRIPTION_BONUS_CENTS_DIVISOR)
}

pub fn odd_day_points(date: PurchaseDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Ten points for purchases after 14:00 and before 16:00
pub fn afternoon_points(time: PurchaseTime) -> u64 {
    if time.is_strictly_between(AFTERNOON_START_MINUTES, AFTERNOON_END_MINUTES) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::{draft, item};
    use crate::domain::entities::ReceiptDraft;

    fn receipt(draft: ReceiptDraft) -> Receipt {
        Receipt::parse(&draft).unwrap()
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let r = receipt(ReceiptDraft {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        });

        let breakdown = PointsBreakdown::for_receipt(&r);
        assert_eq!(breakdown.retailer_name, 6);
        assert_eq!(breakdown.round_dollar_total, 0);
        assert_eq!(breakdown.quarter_multiple_total, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 6);
        assert_eq!(breakdown.odd_purchase_day, 6);
        assert_eq!(breakdown.afternoon_purchase, 0);
        assert_eq!(calculate_points(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let r = receipt(ReceiptDraft {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            total: "9.00".to_string(),
        });
        assert_eq!(calculate_points(&r), 109);
    }

    #[test]
    fn test_retailer_name_points() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("  - & -  "), 0);
    }

    #[test]
    fn test_total_boundaries() {
        let hundred = Money::parse("100.00").unwrap();
        assert_eq!(round_dollar_points(hundred), 50);
        assert_eq!(quarter_multiple_points(hundred), 25);

        let not_quite = Money::parse("100.10").unwrap();
        assert_eq!(round_dollar_points(not_quite), 0);
        assert_eq!(quarter_multiple_points(not_quite), 0);

        let quarter = Money::parse("1.25").unwrap();
        assert_eq!(round_dollar_points(quarter), 0);
        assert_eq!(quarter_multiple_points(quarter), 25);
    }

    #[test]
    fn test_item_pair_points() {
        for n in 0..20usize {
            assert_eq!(item_pair_points(n), (n / 2) as u64 * 5);
        }
    }

    #[test]
    fn test_item_description_points() {
        let pizza = ReceiptItem::parse("Emils Cheese Pizza", "12.25").unwrap();
        assert_eq!(item_description_points(&pizza), 3);

        let dasani = ReceiptItem::parse("Dasani", "1.40").unwrap();
        assert_eq!(item_description_points(&dasani), 1);

        // exact multiple of 5.00 does not round up
        let exact = ReceiptItem::parse("abc", "5.00").unwrap();
        assert_eq!(item_description_points(&exact), 1);

        let free = ReceiptItem::parse("abc", "0.00").unwrap();
        assert_eq!(item_description_points(&free), 0);

        let pepsi = ReceiptItem::parse("Pepsi - 12-oz", "1.25").unwrap();
        assert_eq!(item_description_points(&pepsi), 0);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points(PurchaseDate::parse("2022-01-01").unwrap()), 6);
        assert_eq!(odd_day_points(PurchaseDate::parse("2022-01-31").unwrap()), 6);
        assert_eq!(odd_day_points(PurchaseDate::parse("2022-01-02").unwrap()), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        let at = |raw: &str| afternoon_points(PurchaseTime::parse(raw).unwrap());
        assert_eq!(at("14:00"), 0);
        assert_eq!(at("14:01"), 10);
        assert_eq!(at("15:00"), 10);
        assert_eq!(at("15:59"), 10);
        assert_eq!(at("16:00"), 0);
        assert_eq!(at("13:59"), 0);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let r = receipt(draft());
        let first = calculate_points(&r);
        for _ in 0..10 {
            assert_eq!(calculate_points(&r), first);
        }
        assert_eq!(first, 6);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let mut d = draft();
        d.items = vec![item("abc", "184467440737095516.15")];
        d.total = "184467440737095516.15".to_string();
        let r = receipt(d);
        assert!(calculate_points(&r) > 0);
    }
}
