use crate::domain::package::Package;
use crate::domain::ports::PackageRepository;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory package repository.
///
/// Uses `Arc<RwLock<HashMap<String, Package>>>` to allow shared concurrent
/// access. Backs the CLI and the test suites; `Clone` shares the underlying
/// map.
#[derive(Default, Clone)]
pub struct InMemoryPackageRepository {
    packages: Arc<RwLock<HashMap<String, Package>>>,
}

impl InMemoryPackageRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn store(&self, package: Package) -> Result<()> {
        let mut packages = self.packages.write().await;
        packages.insert(package.id.clone(), package);
        Ok(())
    }

    async fn get(&self, package_id: &str) -> Result<Option<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.get(package_id).cloned())
    }

    async fn find_same_day_arrivals(
        &self,
        location_id: &str,
        unit_number: &str,
        date: NaiveDate,
    ) -> Result<Vec<Package>> {
        let packages = self.packages.read().await;
        Ok(packages
            .values()
            .filter(|p| {
                p.location_id == location_id
                    && p.unit_number == unit_number
                    && p.arrival_date() == date
            })
            .cloned()
            .collect())
    }
}
