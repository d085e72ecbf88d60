//! Domain services

pub mod composer;

pub use composer::{BookingComposer, SubmissionResult};
