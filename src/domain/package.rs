use crate::domain::money::Fee;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Size class used by the `SIZE` pricing schema.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PackageSize {
    S,
    M,
    L,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageStatus {
    #[default]
    Arrived,
    Picked,
}

/// A stored package as seen by the fee engine.
///
/// The engine never mutates a package except through pickup confirmation,
/// which stamps `picked_at`, `fee_paid` and the `Picked` status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Package {
    pub id: String,
    pub tracking_number: String,
    pub recipient_phone: String,
    pub unit_number: String,
    pub size: PackageSize,
    pub location_id: String,
    /// Arrival is always set; a package without one never enters the store.
    pub arrived_at: DateTime<Utc>,
    #[serde(default)]
    pub status: PackageStatus,
    #[serde(default)]
    pub picked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fee_paid: Option<Fee>,
}

impl Package {
    /// Calendar date of arrival, used for same-day sibling grouping.
    pub fn arrival_date(&self) -> NaiveDate {
        self.arrived_at.date_naive()
    }
}
