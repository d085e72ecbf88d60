//! Dispatcher that prints links instead of launching them

use cabbook_domain::Dispatcher;

/// Prints each link with its channel label (dry run)
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDispatcher;

impl Dispatcher for StdoutDispatcher {
    fn open_external(&self, uri: &str) {
        println!("[messaging] {}", uri);
    }

    fn navigate(&self, uri: &str) {
        println!("[mail]      {}", uri);
    }
}
