/// Host events the scene subscribes to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Listener {
    Resize,
    PointerMove,
}

impl Listener {
    const fn bit(self) -> u8 {
        match self {
            Listener::Resize => 1,
            Listener::PointerMove => 1 << 1,
        }
    }
}

/// Set of registered listeners. Each kind is registered at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Listeners(u8);

impl Listeners {
    /// Returns `false` if `listener` was already registered.
    pub fn register(&mut self, listener: Listener) -> bool {
        let fresh = !self.contains(listener);
        self.0 |= listener.bit();
        fresh
    }

    /// Returns `false` if `listener` was not registered.
    pub fn unregister(&mut self, listener: Listener) -> bool {
        let present = self.contains(listener);
        self.0 &= !listener.bit();
        present
    }

    pub fn contains(&self, listener: Listener) -> bool {
        self.0 & listener.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_once() {
        let mut l = Listeners::default();
        assert!(l.register(Listener::Resize));
        assert!(!l.register(Listener::Resize));
        assert!(l.contains(Listener::Resize));
        assert!(!l.contains(Listener::PointerMove));
    }

    #[test]
    fn unregister_clears() {
        let mut l = Listeners::default();
        l.register(Listener::Resize);
        l.register(Listener::PointerMove);
        assert!(l.unregister(Listener::Resize));
        assert!(!l.unregister(Listener::Resize));
        assert!(l.unregister(Listener::PointerMove));
        assert!(l.is_empty());
    }
}
