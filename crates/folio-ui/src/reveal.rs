//! Reveal wrappers.
//!
//! `Reveal` delays its content's entrance until the wrapped region scrolls
//! into view; `Entrance` plays the same animation immediately on first
//! composition. Both remember a [`RevealState`] keyed by the caller's `key`,
//! so the one-shot guarantee survives recomposition.
//!
//! If no [`Intersections`] capability is installed in the composition
//! environment, `Reveal` composes already visible. Content never stays
//! hidden because nothing can measure it.

use std::rc::Rc;

use folio_core::*;

use crate::ViewExt;

/// Wrap `content`; fade/slide it in the first time it becomes visible.
pub fn Reveal(key: impl Into<String>, spec: RevealSpec, content: View) -> View {
    let key = key.into();
    let caps = intersections();

    let state = remember_state_with_key(format!("reveal:{key}"), {
        let caps = caps.clone();
        let key = key.clone();
        move || match caps {
            Some(_) => RevealState::new(spec),
            None => {
                log::debug!("no viewport observation available; '{key}' starts visible");
                RevealState::visible(spec)
            }
        }
    });

    let on_rect: Option<Rc<dyn Fn(Rect)>> = caps.map(|reg| {
        let watch_key = remember_with_key(format!("reveal:{key}:watch"), {
            let reg = reg.clone();
            let state = state.clone();
            let key = key.clone();
            move || {
                let watch = reg.watch(move |ratio| {
                    if state.borrow_mut().on_intersect(ratio) {
                        log::debug!("revealing '{key}' at visibility {ratio:.2}");
                    }
                });
                let wk = watch.key();
                // Tie the subscription's lifetime to the composition scope.
                effect(move || on_unmount(move || drop(watch)));
                wk
            }
        });
        let wk = *watch_key;
        Rc::new(move |r: Rect| reg.update_rect(wk, r)) as Rc<dyn Fn(Rect)>
    });

    state.borrow_mut().update();
    let visual = state.borrow().visual();

    View::new(0, ViewKind::Region { on_rect })
        .modifier(visual_modifier(visual))
        .child(content)
}

/// Wrap `content`; play the entrance animation on first composition without
/// waiting for visibility (hero sections above the fold).
pub fn Entrance(key: impl Into<String>, spec: RevealSpec, content: View) -> View {
    let key = key.into();

    let state = remember_state_with_key(format!("entrance:{key}"), move || {
        let mut s = RevealState::new(spec);
        s.trigger();
        s
    });

    state.borrow_mut().update();
    let visual = state.borrow().visual();

    View::new(0, ViewKind::Region { on_rect: None })
        .modifier(visual_modifier(visual))
        .child(content)
}

fn visual_modifier(v: VisualState) -> Modifier {
    let mut m = Modifier::new().alpha(v.opacity);
    if v.offset_y != 0.0 {
        m = m.translate(0.0, v.offset_y);
    }
    if v.scale != 1.0 {
        m = m.scale(v.scale);
    }
    m
}
