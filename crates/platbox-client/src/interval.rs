//! A repeating host timer bundled with the callback it fires.

/// A registered repeating timer and the callback it invokes.
///
/// Stopping or dropping clears the timer before the callback is released, so
/// the host never fires into a freed callback.
pub struct Interval<C> {
    id: Option<i32>,
    callback: Option<C>,
    clear: Box<dyn FnMut(i32)>,
}

impl<C> Interval<C> {
    /// Take ownership of a timer the host has already started. `clear` is
    /// called with `id` exactly once.
    pub fn new(id: i32, callback: C, clear: impl FnMut(i32) + 'static) -> Self {
        Self {
            id: Some(id),
            callback: Some(callback),
            clear: Box::new(clear),
        }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            (self.clear)(id);
        }
        self.callback = None;
    }

    pub fn is_running(&self) -> bool {
        self.id.is_some()
    }
}

impl<C> Drop for Interval<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
