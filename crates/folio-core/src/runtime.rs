use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::{Rect, Scene, View};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin(scope: Scope) -> Self {
        COMPOSER.with(|c| {
            c.borrow_mut().cursor = 0;
        });
        ComposeGuard { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} changed type; replacing. \
                 Prefer remember_with_key under conditional composition.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            } else {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// A hyperlink's resolved screen region. The page has no other interactions;
/// hosts turn activation of one of these into opening `href`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinkRegion {
    pub id: u64,
    pub rect: Rect,
    pub label: String,
    pub href: String,
}

/// Handle to a scroll container: feed it a wheel delta, get back the
/// unconsumed remainder.
#[derive(Clone)]
pub struct ScrollHandle {
    pub id: u64,
    pub rect: Rect,
    pub on_scroll: Rc<dyn Fn(f32) -> f32>,
}

/// Output of composition for one tick.
pub struct Frame {
    pub scene: Scene,
    pub links: Vec<LinkRegion>,
    pub scrollables: Vec<ScrollHandle>,
}

pub struct Scheduler {
    next_id: u64,
    pub size: (u32, u32),
    root: Scope,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            size: (1280, 800),
            root: Scope::new(),
        }
    }

    pub fn id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl Fn(&View, (u32, u32)) -> (Scene, Vec<LinkRegion>, Vec<ScrollHandle>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let guard = ComposeGuard::begin(self.root.clone());
        let root = guard.scope().run(|| build_root(self));
        let (scene, links, scrollables) = layout_paint(&root, self.size);

        Frame {
            scene,
            links,
            scrollables,
        }
    }

    /// Tear down composed state; runs all scope disposers (released
    /// subscriptions included).
    pub fn dispose(self) {
        self.root.dispose();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
