#[cfg(test)]
mod tests {
    use crate::COMPOSER;
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::animation::*;
    use crate::error::SpecError;
    use crate::remember_with_key;
    use crate::reveal::*;
    use crate::scope::*;
    use crate::signal::*;
    use crate::watch::Intersections;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_key_based_remember() {
        COMPOSER.with(|c| c.borrow_mut().keyed_slots.clear());

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Same slot: the second init never runs
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_visible_fraction() {
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
        };

        let inside = Rect {
            x: 10.0,
            y: 10.0,
            w: 50.0,
            h: 50.0,
        };
        assert_eq!(inside.visible_fraction(&viewport), 1.0);

        // Lower half clipped by the viewport bottom
        let half = Rect {
            x: 0.0,
            y: 50.0,
            w: 100.0,
            h: 100.0,
        };
        assert_eq!(half.visible_fraction(&viewport), 0.5);

        let below = Rect {
            x: 0.0,
            y: 150.0,
            w: 100.0,
            h: 100.0,
        };
        assert_eq!(below.visible_fraction(&viewport), 0.0);

        // Degenerate rects fail open when their origin is in view
        let empty = Rect {
            x: 10.0,
            y: 10.0,
            w: 0.0,
            h: 0.0,
        };
        assert_eq!(empty.visible_fraction(&viewport), 1.0);
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        set_clock(Rc::new(TestClock { t: t0 }));

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(250),
        }));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(1000),
        }));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);

        reset_clock();
    }

    #[test]
    fn test_reveal_triggers_once() {
        let t0 = Instant::now();
        set_clock(Rc::new(TestClock { t: t0 }));

        let mut reveal = RevealState::new(RevealSpec::default());
        assert!(!reveal.is_triggered());
        assert_eq!(reveal.visual(), VisualState::hidden(reveal.spec()));

        assert!(reveal.on_intersect(0.5));
        assert!(reveal.is_triggered());

        // Scrolling back out must not hide it again
        assert!(!reveal.on_intersect(0.0));
        assert!(reveal.is_triggered());
        assert!(!reveal.on_intersect(0.9));
        assert!(reveal.is_triggered());

        reset_clock();
    }

    #[test]
    fn test_reveal_no_premature_trigger() {
        let mut reveal = RevealState::new(RevealSpec::default());
        for _ in 0..10 {
            assert!(!reveal.on_intersect(0.05));
        }
        assert!(!reveal.is_triggered());
        assert!(!reveal.update());
        assert_eq!(reveal.visual().opacity, 0.0);
    }

    #[test]
    fn test_reveal_end_to_end() {
        let t0 = Instant::now();
        set_clock(Rc::new(TestClock { t: t0 }));

        let mut reveal = RevealState::new(RevealSpec::default());
        reveal.on_intersect(0.5);

        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(700),
        }));
        assert!(!reveal.update());
        assert_eq!(reveal.visual(), VisualState::VISIBLE);
        assert!(reveal.is_settled());

        reset_clock();
    }

    #[test]
    fn test_reveal_delay_law() {
        let spec = RevealSpec::delayed(Duration::from_millis(200));
        let t0 = Instant::now();
        set_clock(Rc::new(TestClock { t: t0 }));

        let mut reveal = RevealState::new(spec);
        reveal.on_intersect(1.0);

        // Before the delay elapses the hidden descriptor is unchanged
        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(100),
        }));
        assert!(reveal.update());
        assert_eq!(reveal.visual(), VisualState::hidden(&spec));

        // Mid-transition: strictly between the descriptors
        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(500),
        }));
        assert!(reveal.update());
        let mid = reveal.visual();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < spec.offset);

        // Settled by delay + duration
        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(800),
        }));
        assert!(!reveal.update());
        assert_eq!(reveal.visual(), VisualState::VISIBLE);

        reset_clock();
    }

    #[test]
    fn test_reveal_fail_open_constructor() {
        let mut reveal = RevealState::visible(RevealSpec::default());
        assert!(reveal.is_triggered());
        assert!(reveal.is_settled());
        assert_eq!(reveal.visual(), VisualState::VISIBLE);
        assert!(!reveal.on_intersect(0.9));
    }

    #[test]
    fn test_spec_validation() {
        assert!(RevealSpec::default().validated().is_ok());

        let bad = RevealSpec {
            threshold: 1.5,
            ..RevealSpec::default()
        };
        assert_eq!(bad.validated(), Err(SpecError::ThresholdOutOfRange(1.5)));

        let bad = RevealSpec {
            offset: f32::NAN,
            ..RevealSpec::default()
        };
        assert!(matches!(bad.validated(), Err(SpecError::NonFiniteOffset(_))));

        let bad = RevealSpec {
            scale_from: 0.0,
            ..RevealSpec::default()
        };
        assert_eq!(bad.validated(), Err(SpecError::BadScale(0.0)));
    }

    #[test]
    fn test_watch_delivery_is_deferred() {
        let reg = Intersections::new();
        let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));

        let seen2 = seen.clone();
        let watch = reg.watch(move |r| seen2.borrow_mut().push(r));
        assert!(seen.borrow().is_empty());

        reg.update_rect(
            watch.key(),
            Rect {
                x: 0.0,
                y: 50.0,
                w: 100.0,
                h: 100.0,
            },
        );
        reg.deliver(Rect {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
        });
        assert_eq!(seen.borrow().as_slice(), &[0.5]);
    }

    #[test]
    fn test_watch_unmeasured_region_fails_open() {
        let reg = Intersections::new();
        let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));

        let seen2 = seen.clone();
        let _watch = reg.watch(move |r| seen2.borrow_mut().push(r));

        // No rect was ever reported for this watch
        reg.deliver(Rect {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
        });
        assert_eq!(seen.borrow().as_slice(), &[1.0]);
    }

    #[test]
    fn test_watch_release() {
        let reg = Intersections::new();
        let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));

        let seen2 = seen.clone();
        let watch = reg.watch(move |r| seen2.borrow_mut().push(r));
        assert_eq!(reg.len(), 1);

        drop(watch);
        assert!(reg.is_empty());

        reg.deliver(Rect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0,
        });
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_reveal_through_registry() {
        let t0 = Instant::now();
        set_clock(Rc::new(TestClock { t: t0 }));

        let reg = Intersections::new();
        let state = Rc::new(RefCell::new(RevealState::new(RevealSpec::default())));

        let st = state.clone();
        let watch = reg.watch(move |ratio| {
            st.borrow_mut().on_intersect(ratio);
        });

        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            w: 800.0,
            h: 600.0,
        };

        // Far below the fold: 5% visible, under the 10% threshold
        reg.update_rect(
            watch.key(),
            Rect {
                x: 0.0,
                y: 590.0,
                w: 800.0,
                h: 200.0,
            },
        );
        reg.deliver(viewport);
        assert!(!state.borrow().is_triggered());

        // Scrolled into view
        reg.update_rect(
            watch.key(),
            Rect {
                x: 0.0,
                y: 400.0,
                w: 800.0,
                h: 200.0,
            },
        );
        reg.deliver(viewport);
        assert!(state.borrow().is_triggered());

        // Scrolled past: still revealed
        reg.update_rect(
            watch.key(),
            Rect {
                x: 0.0,
                y: -400.0,
                w: 800.0,
                h: 200.0,
            },
        );
        reg.deliver(viewport);
        assert!(state.borrow().is_triggered());

        set_clock(Rc::new(TestClock {
            t: t0 + Duration::from_millis(700),
        }));
        state.borrow_mut().update();
        assert_eq!(state.borrow().visual(), VisualState::VISIBLE);

        reset_clock();
    }
}
