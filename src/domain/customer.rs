use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portal customer, joined to packages by phone number rather than a strict
/// foreign key.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub unit_number: String,
    pub location_id: String,
    pub is_member: bool,
    #[serde(default)]
    pub membership_expiry: Option<DateTime<Utc>>,
}

impl Customer {
    /// True when the customer holds a membership whose expiry is strictly
    /// after `now`. A member flagged without an expiry date gets no waiver.
    pub fn has_active_membership(&self, now: DateTime<Utc>) -> bool {
        self.is_member && self.membership_expiry.is_some_and(|expiry| expiry > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer(is_member: bool, expiry: Option<DateTime<Utc>>) -> Customer {
        Customer {
            id: "CUST-1".to_string(),
            name: "Ari".to_string(),
            phone_number: "+620001".to_string(),
            unit_number: "A-101".to_string(),
            location_id: "LOC-1".to_string(),
            is_member,
            membership_expiry: expiry,
        }
    }

    #[test]
    fn test_active_membership() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(customer(true, Some(future)).has_active_membership(now));
    }

    #[test]
    fn test_expired_membership() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert!(!customer(true, Some(past)).has_active_membership(now));
        // Expiry exactly at "now" is not strictly in the future.
        assert!(!customer(true, Some(now)).has_active_membership(now));
    }

    #[test]
    fn test_member_without_expiry_gets_no_waiver() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert!(!customer(true, None).has_active_membership(now));
        assert!(!customer(false, None).has_active_membership(now));
    }
}
