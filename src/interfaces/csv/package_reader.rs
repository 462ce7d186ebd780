use crate::domain::package::Package;
use crate::error::{FeeError, Result};
use std::io::Read;

/// Reads packages from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Package>`, with
/// whitespace trimming and flexible record lengths so optional trailing
/// columns (status, pickup timestamp, paid fee) can be omitted.
pub struct PackageReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PackageReader<R> {
    /// Creates a new `PackageReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes packages.
    pub fn packages(self) -> impl Iterator<Item = Result<Package>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FeeError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::package::PackageSize;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id,tracking_number,recipient_phone,unit_number,size,location_id,arrived_at\n\
                    PKG-1, TRK-1, +620001, A-101, M, LOC-1, 2024-01-10T08:00:00Z\n\
                    PKG-2, TRK-2, +620002, B-202, L, LOC-1, 2024-01-11T09:30:00Z";
        let reader = PackageReader::new(data.as_bytes());
        let results: Vec<Result<Package>> = reader.packages().collect();

        assert_eq!(results.len(), 2);
        let pkg = results[0].as_ref().unwrap();
        assert_eq!(pkg.id, "PKG-1");
        assert_eq!(pkg.size, PackageSize::M);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id,tracking_number,recipient_phone,unit_number,size,location_id,arrived_at\n\
                    PKG-1, TRK-1, +620001, A-101, XXL, LOC-1, 2024-01-10T08:00:00Z";
        let reader = PackageReader::new(data.as_bytes());
        let results: Vec<Result<Package>> = reader.packages().collect();

        assert!(results[0].is_err());
    }
}
