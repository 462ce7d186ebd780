use crate::domain::money::Fee;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the batch-quote output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Quote {
    pub package_id: String,
    pub tracking_number: String,
    pub unit_number: String,
    pub fee: Fee,
}

/// Writes computed quotes as CSV.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quotes(&mut self, quotes: Vec<Quote>) -> Result<()> {
        for quote in quotes {
            self.writer.serialize(quote)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_header_and_rows() {
        let mut buffer = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut buffer);
            writer
                .write_quotes(vec![Quote {
                    package_id: "PKG-1".to_string(),
                    tracking_number: "TRK-1".to_string(),
                    unit_number: "A-101".to_string(),
                    fee: Rate::new(dec!(2000)).unwrap().times(3),
                }])
                .unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("package_id,tracking_number,unit_number,fee\n"));
        assert!(output.contains("PKG-1,TRK-1,A-101,6000"));
    }
}
