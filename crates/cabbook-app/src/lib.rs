//! Application service layer - booking session, config, dispatcher wiring

pub mod advisory;
pub mod config;
pub mod dispatcher;
pub mod session;
