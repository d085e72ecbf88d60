//! Domain model types

pub mod booking;
pub mod contact;
pub mod vehicle;

pub use booking::{BookingField, BookingRequest, DEFAULT_PASSENGERS, MAX_PASSENGERS};
pub use contact::BusinessContact;
pub use vehicle::{VehicleCatalogEntry, VehicleType};
