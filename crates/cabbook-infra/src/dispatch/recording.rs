//! In-memory dispatcher that records every call

use std::cell::RefCell;

use cabbook_domain::Dispatcher;

/// One recorded dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCall {
    OpenExternal(String),
    Navigate(String),
}

impl DispatchCall {
    pub fn uri(&self) -> &str {
        match self {
            DispatchCall::OpenExternal(uri) | DispatchCall::Navigate(uri) => uri,
        }
    }
}

/// Records calls in issue order
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    calls: RefCell<Vec<DispatchCall>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DispatchCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Dispatcher for RecordingDispatcher {
    fn open_external(&self, uri: &str) {
        self.calls
            .borrow_mut()
            .push(DispatchCall::OpenExternal(uri.to_string()));
    }

    fn navigate(&self, uri: &str) {
        self.calls
            .borrow_mut()
            .push(DispatchCall::Navigate(uri.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let dispatcher = RecordingDispatcher::new();
        dispatcher.open_external("https://wa.me/1?text=a");
        dispatcher.navigate("mailto:x@y?body=a");

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], DispatchCall::OpenExternal("https://wa.me/1?text=a".to_string()));
        assert_eq!(calls[1].uri(), "mailto:x@y?body=a");

        dispatcher.clear();
        assert!(dispatcher.calls().is_empty());
    }

    #[test]
    fn test_through_reference() {
        let dispatcher = RecordingDispatcher::new();
        let by_ref: &dyn Dispatcher = &dispatcher;
        by_ref.navigate("mailto:a@b");
        assert_eq!(dispatcher.calls(), vec![DispatchCall::Navigate("mailto:a@b".to_string())]);
    }
}
