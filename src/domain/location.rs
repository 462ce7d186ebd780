use crate::domain::billing::DayCountMode;
use crate::domain::money::Rate;
use serde::{Deserialize, Serialize};

/// A locker location and its pricing configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub pricing: PricingSchema,
}

/// The pricing configuration attached to a location. Exactly one rate table
/// variant is active at a time; the grace period applies uniformly before any
/// rate math.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricingSchema {
    pub grace_period_days: u32,
    #[serde(flatten)]
    pub rates: RateTable,
}

/// The per-scheme rate tables, keyed by the `type` tag of the location's
/// pricing document.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum RateTable {
    #[serde(rename = "FLAT", rename_all = "camelCase")]
    Flat { flat_rate: Rate },
    #[serde(rename = "PROGRESSIVE", rename_all = "camelCase")]
    Progressive { first_day_rate: Rate, next_day_rate: Rate },
    #[serde(rename = "SIZE", rename_all = "camelCase")]
    Size {
        size_s: Rate,
        size_m: Rate,
        size_l: Rate,
    },
    #[serde(rename = "QUANTITY", rename_all = "camelCase")]
    Quantity { qty_first: Rate, qty_next_rate: Rate },
    /// Catch-all for schema types this build does not know. Quotes against it
    /// resolve to a zero fee instead of an error.
    #[serde(other)]
    Unrecognized,
}

impl RateTable {
    /// QUANTITY bills by calendar date; every other scheme bills rolling
    /// 24-hour blocks.
    pub fn day_count_mode(&self) -> DayCountMode {
        match self {
            RateTable::Quantity { .. } => DayCountMode::Calendar,
            _ => DayCountMode::Rolling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_flat_schema() {
        let json = r#"{
            "id": "LOC-1",
            "name": "Green Tower",
            "pricing": { "type": "FLAT", "gracePeriodDays": 1, "flatRate": 2000 }
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.pricing.grace_period_days, 1);
        assert_eq!(
            location.pricing.rates,
            RateTable::Flat {
                flat_rate: Rate::new(dec!(2000)).unwrap()
            }
        );
        assert_eq!(location.pricing.rates.day_count_mode(), DayCountMode::Rolling);
    }

    #[test]
    fn test_parse_progressive_schema() {
        let json = r#"{ "type": "PROGRESSIVE", "gracePeriodDays": 0,
                        "firstDayRate": 3000, "nextDayRate": 5000 }"#;
        let schema: PricingSchema = serde_json::from_str(json).unwrap();
        assert_eq!(
            schema.rates,
            RateTable::Progressive {
                first_day_rate: Rate::new(dec!(3000)).unwrap(),
                next_day_rate: Rate::new(dec!(5000)).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_quantity_schema_uses_calendar_days() {
        let json = r#"{ "type": "QUANTITY", "gracePeriodDays": 0,
                        "qtyFirst": 1000, "qtyNextRate": 1500 }"#;
        let schema: PricingSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.rates.day_count_mode(), DayCountMode::Calendar);
    }

    #[test]
    fn test_unknown_schema_type_parses_to_unrecognized() {
        let json = r#"{ "type": "SEASONAL", "gracePeriodDays": 2, "seasonalRate": 9000 }"#;
        let schema: PricingSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.rates, RateTable::Unrecognized);
        assert_eq!(schema.grace_period_days, 2);
    }

    #[test]
    fn test_negative_rate_rejected_at_parse_time() {
        let json = r#"{ "type": "FLAT", "gracePeriodDays": 0, "flatRate": -100 }"#;
        assert!(serde_json::from_str::<PricingSchema>(json).is_err());
    }
}
