//! # State, composition, and the reveal engine
//!
//! Folio uses a small reactive core instead of an explicit widget tree with
//! mutable fields. The pieces:
//!
//! - `Signal<T>` — observable value with subscriptions.
//! - `remember*` — composition-bound storage slots.
//! - `effect` / `scoped_effect` — side effects with cleanup.
//! - `RevealState` + `Intersections` — the one-shot, visibility-triggered
//!   entrance animation this app is built around.
//!
//! ## Signals
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! UI state lives in `remember_*` slots rather than globals:
//!
//! ```rust
//! use folio_core::*;
//!
//! let a = remember_with_key("answer", || 42);
//! let b = remember_with_key("answer", || 0);
//! assert_eq!(*a, *b); // same slot, the second init never runs
//! ```
//!
//! - `remember` and `remember_state` are order-based: the Nth call in a
//!   composition pass always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key-based and
//!   stable across conditional branches.
//!
//! ## Reveal
//!
//! The reveal engine is a plain state machine fed by an injected
//! intersection-delivery capability, so tests drive it without any host
//! environment:
//!
//! ```rust
//! use folio_core::reveal::{RevealSpec, RevealState, VisualState};
//!
//! let mut reveal = RevealState::new(RevealSpec::default());
//! assert_eq!(reveal.visual().opacity, 0.0);
//!
//! reveal.on_intersect(0.5); // half visible, threshold is 0.1
//! while reveal.update() {}
//! assert_eq!(reveal.visual(), VisualState::VISIBLE);
//! ```

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod reveal;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod view;
pub mod watch;

pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use signal::*;
pub use view::*;
