//! Ownership of the single library instance.

/// Lifecycle of a session's library instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Construction failed; nothing to release.
    Uninitialized,
    /// The instance is live and accepts calls.
    Live,
    /// The instance was released and never comes back.
    Destroyed,
}

/// Exclusive owner of a library instance.
///
/// `Uninitialized → Live → Destroyed`, or `Uninitialized → Destroyed`.
/// Releasing happens in exactly one place: [`destroy`](Self::destroy), which
/// drops the owned handle.
#[derive(Debug)]
pub(crate) enum SessionHandle<H> {
    Uninitialized,
    Live(H),
    Destroyed,
}

impl<H> SessionHandle<H> {
    pub(crate) const fn state(&self) -> State {
        match self {
            Self::Uninitialized => State::Uninitialized,
            Self::Live(_) => State::Live,
            Self::Destroyed => State::Destroyed,
        }
    }

    pub(crate) const fn get(&self) -> Option<&H> {
        match self {
            Self::Live(handle) => Some(handle),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut H> {
        match self {
            Self::Live(handle) => Some(handle),
            _ => None,
        }
    }

    /// Release the instance. Returns whether a live instance was released.
    pub(crate) fn destroy(&mut self) -> bool {
        let was_live = matches!(self, Self::Live(_));
        // Dropping the previous value releases the instance.
        *self = Self::Destroyed;
        was_live
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Counted(Rc<Cell<u32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn destroy_releases_once() {
        let released = Rc::new(Cell::new(0));
        let mut handle = SessionHandle::Live(Counted(Rc::clone(&released)));
        assert_eq!(handle.state(), State::Live);
        assert!(handle.destroy());
        assert!(!handle.destroy());
        assert_eq!(released.get(), 1);
        assert_eq!(handle.state(), State::Destroyed);
        assert!(handle.get().is_none());
    }

    #[test]
    fn uninitialized_can_be_destroyed() {
        let mut handle: SessionHandle<Counted> = SessionHandle::Uninitialized;
        assert!(handle.get_mut().is_none());
        assert!(!handle.destroy());
        assert_eq!(handle.state(), State::Destroyed);
    }
}
