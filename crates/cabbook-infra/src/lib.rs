//! Infrastructure layer - host adapters for booking dispatch

pub mod dispatch;

pub use dispatch::{DispatchCall, RecordingDispatcher, StdoutDispatcher, SystemDispatcher};
