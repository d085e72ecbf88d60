//! Dispatcher implementations

mod recording;
mod stdout;
mod system;

pub use recording::{DispatchCall, RecordingDispatcher};
pub use stdout::StdoutDispatcher;
pub use system::{default_opener, SystemDispatcher};
