//! Domain layer for cabbook
//!
//! Static vehicle catalog, the in-progress booking request, and the
//! composer that turns a request into the outbound messaging and mail links.

pub mod catalog;
pub mod dispatch;
pub mod model;
pub mod service;

pub use dispatch::Dispatcher;
pub use model::*;
pub use service::{BookingComposer, SubmissionResult};
