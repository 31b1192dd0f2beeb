use folio_core::*;
use web_time::{Duration, Instant};

use crate::reveal::{Entrance, Reveal};
use crate::scroll::{ScrollArea, remember_scroll_state};
use crate::{text_width_px, wrap_lines};
use crate::*;

fn scene_summary(scene: &Scene) -> String {
    let mut rects = 0;
    let mut borders = 0;
    let mut texts = 0;
    let mut clips = 0;
    for n in &scene.nodes {
        match n {
            SceneNode::Rect { .. } => rects += 1,
            SceneNode::Border { .. } => borders += 1,
            SceneNode::Text { .. } => texts += 1,
            SceneNode::PushClip { .. } => clips += 1,
            _ => {}
        }
    }
    format!("rects={rects} borders={borders} texts={texts} clips={clips}")
}

fn find_text<'a>(scene: &'a Scene, needle: &str) -> Option<(&'a str, Color, Rect)> {
    scene.nodes.iter().find_map(|n| match n {
        SceneNode::Text {
            text, color, rect, ..
        } if text.contains(needle) => Some((text.as_str(), *color, *rect)),
        _ => None,
    })
}

#[test]
fn column_stacks_children() {
    let view = Column(Modifier::new().padding(10.0)).child((Text("alpha"), Text("beta")));
    let (scene, links, scrolls) = layout_and_paint(&view, (400, 300), 1.0);

    assert!(links.is_empty());
    assert!(scrolls.is_empty());

    let (_, _, first) = find_text(&scene, "alpha").expect("first text painted");
    let (_, _, second) = find_text(&scene, "beta").expect("second text painted");
    assert!(second.y > first.y);
    assert!(first.x >= 10.0); // padding applied

    insta::assert_snapshot!(scene_summary(&scene), @"rects=0 borders=0 texts=2 clips=0");
}

#[test]
fn link_reports_its_region() {
    let view = Row(Modifier::new()).child(Link("View Project", "https://example.com/demo"));
    let (scene, links, _) = layout_and_paint(&view, (400, 300), 1.0);

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].label, "View Project");
    assert_eq!(links[0].href, "https://example.com/demo");
    assert!(links[0].rect.w > 0.0 && links[0].rect.h > 0.0);
    assert!(find_text(&scene, "View Project").is_some());
}

#[test]
fn grid_places_cells_in_columns_and_rows() {
    let cell = |label: &str| {
        Box(Modifier::new()
            .size(50.0, 50.0)
            .background(Color::from_hex("#333333")))
        .child(Text(label))
    };
    let view = Grid(
        2,
        Modifier::new().width(200.0),
        vec![cell("a"), cell("b"), cell("c"), cell("d")],
        0.0,
        0.0,
    );
    let (scene, _, _) = layout_and_paint(&view, (200, 400), 1.0);

    let rects: Vec<Rect> = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 4);
    assert!(rects[1].x > rects[0].x, "second cell in the next column");
    assert!(rects[2].y > rects[0].y, "third cell wraps to the next row");
}

#[test]
fn scene_serializes_for_dumps() {
    let view = Column(Modifier::new()).child(Text("hi"));
    let (scene, _, _) = layout_and_paint(&view, (100, 100), 1.0);
    let json = serde_json::to_string(&scene).unwrap();
    assert!(json.contains("\"Text\""));
    assert!(json.contains("clear_color"));
}

#[test]
fn wrap_lines_breaks_on_words() {
    let lines = wrap_lines("one two three four", 10.0, 60.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width_px(line, 10.0) <= 60.0 + f32::EPSILON);
    }
    assert_eq!(lines.join(" "), "one two three four");
}

#[test]
fn reveal_fails_open_without_observation() {
    let mut sched = Scheduler::new();
    sched.size = (800, 600);

    let frame = sched.compose(
        |_s| Reveal("solo", RevealSpec::default(), Text("Always there")),
        |v, size| layout_and_paint(v, size, 1.0),
    );

    let (_, color, _) = find_text(&frame.scene, "Always there").expect("text painted");
    assert_eq!(color.3, 255, "content visible without a capability");
}

#[test]
fn entrance_plays_on_first_composition() {
    let t0 = Instant::now();
    set_clock(std::rc::Rc::new(TestClock { t: t0 }));

    let mut sched = Scheduler::new();
    sched.size = (800, 600);
    let build = |_s: &mut Scheduler| Entrance("hero", RevealSpec::default(), Text("Headline"));

    let frame = sched.compose(build, |v, size| layout_and_paint(v, size, 1.0));
    let (_, color, _) = find_text(&frame.scene, "Headline").expect("text painted");
    assert_eq!(color.3, 0, "hidden at the first instant");

    set_clock(std::rc::Rc::new(TestClock {
        t: t0 + Duration::from_millis(700),
    }));
    let frame = sched.compose(build, |v, size| layout_and_paint(v, size, 1.0));
    let (_, color, _) = find_text(&frame.scene, "Headline").expect("text painted");
    assert_eq!(color.3, 255, "settled after the duration");

    reset_clock();
}

#[test]
fn reveal_triggers_after_scrolling_into_view() {
    let t0 = Instant::now();
    set_clock(std::rc::Rc::new(TestClock { t: t0 }));

    let mut sched = Scheduler::new();
    sched.size = (800, 600);
    let reg = Intersections::new();
    let viewport = Rect {
        x: 0.0,
        y: 0.0,
        w: 800.0,
        h: 600.0,
    };

    let build = {
        let reg = reg.clone();
        move |_s: &mut Scheduler| {
            with_intersections(reg.clone(), || {
                let scroll = remember_scroll_state("page");
                ScrollArea(
                    Modifier::new().fill_max_size(),
                    scroll,
                    Column(Modifier::new()).child((
                        Box(Modifier::new().height(1500.0).width(10.0)),
                        Reveal("below-fold", RevealSpec::default(), Text("Hello")),
                    )),
                )
            })
        }
    };
    let layout = |v: &View, size: (u32, u32)| layout_and_paint(v, size, 1.0);

    // Frame 1: the region sits far below the fold
    let frame = sched.compose(build.clone(), layout);
    reg.deliver(viewport);
    let (_, color, _) = find_text(&frame.scene, "Hello").expect("text painted");
    assert_eq!(color.3, 0, "hidden while out of view");

    // Scroll to the bottom; the leftover tells us we hit the end
    let leftover = (frame.scrollables[0].on_scroll)(5000.0);
    assert!(leftover > 0.0);

    // Frame 2: now in view; delivery after layout arms the reveal
    let frame = sched.compose(build.clone(), layout);
    reg.deliver(viewport);
    let (_, color, _) = find_text(&frame.scene, "Hello").expect("text painted");
    assert_eq!(color.3, 0, "not yet painted visible in the same frame");

    // Frame 3: past the duration, fully revealed
    set_clock(std::rc::Rc::new(TestClock {
        t: t0 + Duration::from_millis(700),
    }));
    let frame = sched.compose(build, layout);
    let (_, color, _) = find_text(&frame.scene, "Hello").expect("text painted");
    assert_eq!(color.3, 255);

    // Scrolling back up must not hide it again
    let _ = (frame.scrollables[0].on_scroll)(-5000.0);
    let frame = sched.compose(
        {
            let reg = reg.clone();
            move |_s: &mut Scheduler| {
                with_intersections(reg.clone(), || {
                    let scroll = remember_scroll_state("page");
                    ScrollArea(
                        Modifier::new().fill_max_size(),
                        scroll,
                        Column(Modifier::new()).child((
                            Box(Modifier::new().height(1500.0).width(10.0)),
                            Reveal("below-fold", RevealSpec::default(), Text("Hello")),
                        )),
                    )
                })
            }
        },
        layout,
    );
    reg.deliver(viewport);
    let (_, color, _) = find_text(&frame.scene, "Hello").expect("text painted");
    assert_eq!(color.3, 255, "one-shot: stays revealed after scrolling away");

    reset_clock();
}
