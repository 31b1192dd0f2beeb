//! # Scroll model
//!
//! `ScrollState` holds a clamped vertical offset plus the viewport and
//! content heights the layout pass feeds back each frame. `ScrollArea`
//! builds the `ViewKind::ScrollV` node wiring:
//!
//! - `on_scroll` — consumes a wheel delta, returns the leftover the host can
//!   use to detect the ends of the page.
//! - `set_viewport_height` / `set_content_height` — keep the state clamped
//!   when sizes change.
//! - `get_scroll_offset` — read by paint to translate the content.

use folio_core::*;
use std::rc::Rc;

use crate::{Column, ViewExt};

pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
        }
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_offset(&self, off: f32) {
        self.scroll_offset.set(off.clamp(0.0, self.max_offset()));
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset();
        self.scroll_offset.update(|o| *o = o.clamp(0.0, max_off));
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Consume `dy` pixels, clamp to bounds, return the leftover.
    pub fn scroll_immediate(&self, dy: f32) -> f32 {
        let before = self.scroll_offset.get();
        let target = (before + dy).clamp(0.0, self.max_offset());
        self.scroll_offset.set(target);
        dy - (target - before)
    }
}

pub fn remember_scroll_state(key: impl Into<String>) -> Rc<ScrollState> {
    remember_with_key(format!("scroll:{}", key.into()), ScrollState::new)
}

/// Vertical scroll container.
pub fn ScrollArea(modifier: Modifier, state: Rc<ScrollState>, content: View) -> View {
    let on_scroll: Rc<dyn Fn(f32) -> f32> = {
        let st = state.clone();
        Rc::new(move |dy| st.scroll_immediate(dy))
    };
    let set_viewport = {
        let st = state.clone();
        Rc::new(move |h: f32| st.set_viewport_height(h)) as Rc<dyn Fn(f32)>
    };
    let set_content = {
        let st = state.clone();
        Rc::new(move |h: f32| st.set_content_height(h)) as Rc<dyn Fn(f32)>
    };
    let get_offset = {
        let st = state.clone();
        Rc::new(move || st.get()) as Rc<dyn Fn() -> f32>
    };

    // The content keeps its natural height inside the clipped container.
    let body = Column(Modifier::new().fill_max_width().flex_shrink(0.0)).child(content);

    View::new(
        0,
        ViewKind::ScrollV {
            on_scroll: Some(on_scroll),
            set_viewport_height: Some(set_viewport),
            set_content_height: Some(set_content),
            get_scroll_offset: Some(get_offset),
        },
    )
    .modifier(modifier)
    .with_children(vec![body])
}
