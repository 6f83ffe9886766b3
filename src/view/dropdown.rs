use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    active: HashSet<u64>,
}

/// Document-level registry of outside-click listeners.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Listeners>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard is dropped.
    pub fn register(&self) -> OutsideClickGuard {
        let id = {
            let mut listeners = self.lock();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.active.insert(id);
            id
        };
        debug!("Registered outside-click listener {}", id);
        OutsideClickGuard {
            registry: self.clone(),
            id,
        }
    }

    /// Number of listeners currently registered.
    pub fn active(&self) -> usize {
        self.lock().active.len()
    }

    fn deregister(&self, id: u64) {
        self.lock().active.remove(&id);
        debug!("Removed outside-click listener {}", id);
    }

    fn lock(&self) -> MutexGuard<'_, Listeners> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// RAII guard that deregisters its listener when dropped
pub struct OutsideClickGuard {
    registry: ListenerRegistry,
    id: u64,
}

impl OutsideClickGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        self.registry.deregister(self.id);
    }
}

/// Dropdown menu that closes on a click outside of it.
///
/// The outside-click listener only exists while the menu is open.
pub struct Dropdown {
    registry: ListenerRegistry,
    listener: Option<OutsideClickGuard>,
}

impl Dropdown {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            listener: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    pub fn open(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(self.registry.register());
        }
    }

    pub fn close(&mut self) {
        self.listener = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// A click landed outside the menu.
    pub fn click_outside(&mut self) {
        if self.is_open() {
            debug!("Click outside dropdown, closing");
            self.close();
        }
    }
}
