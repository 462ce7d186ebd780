pub mod customer_reader;
pub mod package_reader;
pub mod quote_writer;
