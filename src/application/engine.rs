use crate::domain::billing;
use crate::domain::customer::Customer;
use crate::domain::location::{Location, RateTable};
use crate::domain::money::Fee;
use crate::domain::package::{Package, PackageSize, PackageStatus};
use crate::domain::ports::PackageRepositoryBox;
use crate::error::{FeeError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Computes storage fees for stored packages.
///
/// The engine is stateless and read-only: its only collaborator access is the
/// same-day sibling scan needed by the QUANTITY scheme, plus the get/store
/// pair used when a pickup is confirmed. Fees are never cached; a quote
/// recomputed after a day boundary may legitimately differ.
pub struct FeeEngine {
    packages: PackageRepositoryBox,
}

impl FeeEngine {
    pub fn new(packages: PackageRepositoryBox) -> Self {
        Self { packages }
    }

    /// Quotes the fee owed for `package` at the current instant.
    pub async fn quote(
        &self,
        package: &Package,
        location: &Location,
        customer: Option<&Customer>,
    ) -> Result<Fee> {
        self.quote_at(package, location, customer, Utc::now()).await
    }

    /// Quotes the fee owed for `package` as evaluated at `now`.
    pub async fn quote_at(
        &self,
        package: &Package,
        location: &Location,
        customer: Option<&Customer>,
        now: DateTime<Utc>,
    ) -> Result<Fee> {
        // The membership waiver beats everything, grace period included.
        if customer.is_some_and(|c| c.has_active_membership(now)) {
            debug!(package = %package.id, "active membership, fee waived");
            return Ok(Fee::ZERO);
        }

        let schema = &location.pricing;
        let days = billing::effective_days(
            package.arrived_at,
            now,
            schema.rates.day_count_mode(),
            schema.grace_period_days,
        );
        debug!(package = %package.id, days, "effective days");
        if days == 0 {
            return Ok(Fee::ZERO);
        }

        let fee = match &schema.rates {
            RateTable::Flat { flat_rate } => flat_rate.times(days),
            RateTable::Progressive {
                first_day_rate,
                next_day_rate,
            } => {
                // Day one is always billed at the first-day rate, no matter
                // how many further days accrue.
                Fee::from(*first_day_rate) + next_day_rate.times(days - 1)
            }
            RateTable::Size {
                size_s,
                size_m,
                size_l,
            } => {
                let rate = match package.size {
                    PackageSize::S => *size_s,
                    PackageSize::M => *size_m,
                    PackageSize::L => *size_l,
                };
                rate.times(days)
            }
            RateTable::Quantity {
                qty_first,
                qty_next_rate,
            } => {
                let rank = self.daily_arrival_rank(package).await?;
                let rate = if rank == 1 { *qty_first } else { *qty_next_rate };
                rate.times(days)
            }
            // Intentional business rule, not an oversight: a misconfigured
            // location degrades to a free pickup rather than a blocked one.
            RateTable::Unrecognized => {
                warn!(location = %location.id, "unrecognized pricing schema, fee defaults to 0");
                Fee::ZERO
            }
        };

        Ok(fee)
    }

    /// Confirms pickup of a stored package: computes the fee at `now`, stamps
    /// the pickup timestamp and paid fee, and persists the updated package.
    pub async fn confirm_pickup(
        &self,
        package_id: &str,
        location: &Location,
        customer: Option<&Customer>,
        now: DateTime<Utc>,
    ) -> Result<Package> {
        let mut package = self
            .packages
            .get(package_id)
            .await?
            .ok_or_else(|| FeeError::Validation(format!("unknown package: {package_id}")))?;

        if package.status == PackageStatus::Picked {
            return Err(FeeError::Validation(format!(
                "package already picked up: {package_id}"
            )));
        }

        let fee = self.quote_at(&package, location, customer, now).await?;
        package.status = PackageStatus::Picked;
        package.picked_at = Some(now);
        package.fee_paid = Some(fee);
        self.packages.store(package.clone()).await?;
        Ok(package)
    }

    /// 1-based position of `package` among same-location, same-unit packages
    /// arriving on the same calendar date, ordered by arrival time. A package
    /// missing from the stored set (e.g. a quote for an unsaved package)
    /// ranks first.
    async fn daily_arrival_rank(&self, package: &Package) -> Result<u32> {
        let mut siblings = self
            .packages
            .find_same_day_arrivals(
                &package.location_id,
                &package.unit_number,
                package.arrival_date(),
            )
            .await?;
        siblings.sort_by_key(|p| p.arrived_at);

        let rank = siblings
            .iter()
            .position(|p| p.id == package.id)
            .map_or(1, |index| index as u32 + 1);
        debug!(package = %package.id, rank, "daily arrival rank");
        Ok(rank)
    }
}
