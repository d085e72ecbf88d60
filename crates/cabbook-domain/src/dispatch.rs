//! Dispatch capability for composed booking links

/// Host capability that hands a link to an external application.
///
/// Both calls are fire-and-forget: the host gives no signal whether the
/// messaging app or mail client actually opened, so neither returns one.
pub trait Dispatcher {
    /// Open `uri` in a new browsing context (messaging channel)
    fn open_external(&self, uri: &str);

    /// Navigate the current context to `uri` (mail channel)
    fn navigate(&self, uri: &str);
}

impl<D: Dispatcher + ?Sized> Dispatcher for &D {
    fn open_external(&self, uri: &str) {
        (**self).open_external(uri)
    }

    fn navigate(&self, uri: &str) {
        (**self).navigate(uri)
    }
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn open_external(&self, uri: &str) {
        (**self).open_external(uri)
    }

    fn navigate(&self, uri: &str) {
        (**self).navigate(uri)
    }
}
