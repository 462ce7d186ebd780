use super::package::Package;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn store(&self, package: Package) -> Result<()>;
    async fn get(&self, package_id: &str) -> Result<Option<Package>>;
    /// All packages for `location_id` and `unit_number` whose arrival falls
    /// on `date`, in arbitrary order. The fee engine sorts them itself.
    async fn find_same_day_arrivals(
        &self,
        location_id: &str,
        unit_number: &str,
        date: NaiveDate,
    ) -> Result<Vec<Package>>;
}

pub type PackageRepositoryBox = Box<dyn PackageRepository>;
