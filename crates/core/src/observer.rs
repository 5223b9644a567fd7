/// Receives evaluation events as a metric is computed.
///
/// Observers let callers log, record, or forward what a metric call is doing
/// without changing its API. They are handed to each call explicitly, so the
/// destination of those events belongs to the caller.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a single event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer that ignores every event.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
