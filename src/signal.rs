use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Observable scroll progress: the hub between a viewport (the writer) and
/// any number of mounted controllers (the readers).
///
/// Single-threaded by construction. Cloning shares the underlying channel,
/// so a viewport and a controller can hold the same signal without either
/// owning the other.
#[derive(Clone)]
pub struct ProgressSignal {
    inner: Rc<RefCell<SignalInner>>,
}

struct SignalInner {
    value: f64,
    next_id: u64,
    entries: Vec<Entry>,
    dispatching: bool,
    // ids unsubscribed while a dispatch had the entries checked out
    dead: Vec<u64>,
}

struct Entry {
    id: u64,
    callback: Box<dyn FnMut(f64)>,
}

impl ProgressSignal {
    pub fn new(initial: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value: initial,
                next_id: 0,
                entries: Vec::new(),
                dispatching: false,
                dead: Vec::new(),
            })),
        }
    }

    /// Last value written, delivered or not.
    pub fn get(&self) -> f64 {
        self.inner.borrow().value
    }

    /// Currently registered subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Store `value` and notify subscribers in registration order.
    ///
    /// A `set` issued from inside a callback updates the stored value only;
    /// the in-flight dispatch keeps its own value and no nested dispatch
    /// runs. Subscribers added during a dispatch first hear the next `set`.
    pub fn set(&self, value: f64) {
        let mut checked_out = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
            std::mem::take(&mut inner.entries)
        };

        for entry in &mut checked_out {
            let unsubscribed = self.inner.borrow().dead.contains(&entry.id);
            if !unsubscribed {
                (entry.callback)(value);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.entries);
        checked_out.retain(|e| !inner.dead.contains(&e.id));
        checked_out.extend(added);
        inner.entries = checked_out;
        inner.dead.clear();
        inner.dispatching = false;
    }

    /// Register `callback` for every subsequent `set`. The returned guard
    /// unregisters on drop, so the subscription cannot outlive its owner.
    pub fn subscribe(&self, callback: impl FnMut(f64) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            callback: Box::new(callback),
        });
        Subscription {
            signal: Rc::downgrade(&self.inner),
            id,
        }
    }
}

impl std::fmt::Debug for ProgressSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ProgressSignal")
            .field("value", &inner.value)
            .field("subscribers", &inner.entries.len())
            .finish()
    }
}

/// Guard for one registered callback; dropping it unregisters immediately,
/// including from inside a dispatch (the remaining delivery is suppressed).
#[must_use = "dropping a Subscription unregisters its callback"]
pub struct Subscription {
    signal: Weak<RefCell<SignalInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.signal.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if inner.dispatching {
            inner.dead.push(self.id);
        }
        inner.entries.retain(|e| e.id != self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
