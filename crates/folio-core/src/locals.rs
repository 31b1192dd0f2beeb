//! # Theming and composition locals
//!
//! Thread-local "composition locals" carry ambient UI parameters down the
//! tree without threading them through every call:
//!
//! - `Theme` — semantic colors for surfaces, text, accents.
//! - `Intersections` — the viewport-visibility capability (see
//!   [`crate::watch`]). Its *absence* is meaningful: wrappers that cannot
//!   observe visibility compose already-visible instead.
//!
//! Override for a subtree with `with_theme` / `with_intersections`:
//!
//! ```rust
//! use folio_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     surface: Color::from_hex("#F5F5F5"),
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;
use crate::watch::Intersections;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

/// High-level color theme used by widgets.
///
/// Intentionally small and semantic; apps map their palette onto these roles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Default container surface (cards, panels).
    pub surface: Color,
    /// Primary foreground color on top of `surface`/`background`.
    pub on_surface: Color,

    /// Primary accent color.
    pub primary: Color,
    /// Foreground used on top of `primary`.
    pub on_primary: Color,

    /// Low-emphasis container fill (badges, placeholders).
    pub muted: Color,
    /// Low-emphasis foreground.
    pub on_muted: Color,

    /// Low-emphasis outline/border color.
    pub outline: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            primary: Color::from_hex("#34AF82"),
            on_primary: Color::WHITE,
            muted: Color::from_hex("#2A2A2A"),
            on_muted: Color::from_hex("#9A9A9A"),
            outline: Color::from_hex("#555555"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn theme() -> Theme {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<Theme>())
                && let Some(t) = v.downcast_ref::<Theme>()
            {
                return *t;
            }
        }
        Theme::default()
    })
}

/// Install the viewport-visibility capability for the composition below.
pub fn with_intersections<R>(reg: Intersections, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Intersections>(), Box::new(reg));
        f()
    })
}

/// The ambient visibility capability, if the host provides one. `None` means
/// visibility cannot be observed here and callers should fail open.
pub fn intersections() -> Option<Intersections> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<Intersections>())
                && let Some(reg) = v.downcast_ref::<Intersections>()
            {
                return Some(reg.clone());
            }
        }
        None
    })
}
