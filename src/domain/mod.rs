pub mod billing;
pub mod customer;
pub mod location;
pub mod money;
pub mod package;
pub mod ports;
