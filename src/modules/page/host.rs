/// The boundary collaborators a page talks to.
///
/// Controllers borrow the whole host mutably for one handler at a time.
#[derive(Debug)]
pub struct Host<D, S, T> {
    pub surface: D,
    pub store: S,
    pub timers: T,
}

impl<D, S, T> Host<D, S, T> {
    pub fn new(surface: D, store: S, timers: T) -> Self {
        Self {
            surface,
            store,
            timers,
        }
    }

    /// Take the host apart, e.g. to hand its store to a reloaded page
    pub fn into_parts(self) -> (D, S, T) {
        (self.surface, self.store, self.timers)
    }
}
