//! Intersection delivery.
//!
//! `Intersections` is the capability that tells reveal wrappers how visible
//! their region currently is. Widgets register a callback and keep the
//! returned [`Watch`] alive; layout reports each region's viewport-space rect;
//! the platform calls [`Intersections::deliver`] once per frame after layout.
//!
//! Delivery is never synchronous with registration: a fresh watch hears
//! nothing until the next pass. A watch whose region was never measured is
//! delivered a fraction of 1.0 — missing geometry must not keep content
//! hidden.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};

use crate::Rect;

new_key_type! {
    pub struct WatchKey;
}

struct WatchEntry {
    rect: Option<Rect>,
    on_ratio: Rc<dyn Fn(f32)>,
}

#[derive(Default)]
struct Registry {
    watches: SlotMap<WatchKey, WatchEntry>,
}

/// Cloneable handle to the watch registry. Installed as a composition local;
/// its absence means the host cannot observe visibility at all and wrappers
/// fall back to always-visible.
#[derive(Clone, Default)]
pub struct Intersections {
    inner: Rc<RefCell<Registry>>,
}

impl Intersections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It will first run during a later `deliver` pass,
    /// never inside this call.
    pub fn watch(&self, on_ratio: impl Fn(f32) + 'static) -> Watch {
        let key = self.inner.borrow_mut().watches.insert(WatchEntry {
            rect: None,
            on_ratio: Rc::new(on_ratio),
        });
        Watch {
            key,
            owner: Rc::downgrade(&self.inner),
        }
    }

    /// Record the watched region's rect in viewport space. Called from layout.
    pub fn update_rect(&self, key: WatchKey, rect: Rect) {
        if let Some(entry) = self.inner.borrow_mut().watches.get_mut(key) {
            entry.rect = Some(rect);
        }
    }

    /// Report every watch's visible fraction of `viewport`.
    pub fn deliver(&self, viewport: Rect) {
        // Snapshot first: callbacks may register or release watches.
        let pending: Vec<(Rc<dyn Fn(f32)>, f32)> = self
            .inner
            .borrow()
            .watches
            .iter()
            .map(|(_, entry)| {
                let ratio = entry
                    .rect
                    .map(|r| r.visible_fraction(&viewport))
                    .unwrap_or(1.0);
                (entry.on_ratio.clone(), ratio)
            })
            .collect();
        for (on_ratio, ratio) in pending {
            on_ratio(ratio);
        }
    }

    pub fn release(&self, key: WatchKey) {
        self.inner.borrow_mut().watches.remove(key);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Subscription handle. Releasing (or dropping) it removes the watch.
pub struct Watch {
    key: WatchKey,
    owner: Weak<RefCell<Registry>>,
}

impl Watch {
    pub fn key(&self) -> WatchKey {
        self.key
    }

    /// Idempotent removal of the watch from its registry.
    pub fn release(&self) {
        if let Some(registry) = self.owner.upgrade() {
            registry.borrow_mut().watches.remove(self.key);
        }
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.release();
    }
}
