//! Service tiers and their price multipliers

mod catalog;

pub use catalog::{STANDARD_SERVICE_TYPE, ServiceTypeCatalog, ServiceTypeOption};
