use std::collections::HashSet;

use folio_core::*;
use folio_platform::{HeadlessConfig, HeadlessRunner};

use crate::{app, content};

fn text_alpha(scene: &Scene, needle: &str) -> Option<u8> {
    scene.nodes.iter().find_map(|n| match n {
        SceneNode::Text { text, color, .. } if text.contains(needle) => Some(color.3),
        _ => None,
    })
}

#[test]
fn content_is_complete() {
    let projects = content::projects();
    assert_eq!(projects.len(), 3);
    assert!(projects[2].wide, "the closing card spans the grid");
    for p in projects {
        assert!(!p.stack.is_empty());
        assert!(p.url.starts_with("https://"));
    }

    let groups = content::skill_groups();
    assert_eq!(groups.len(), 4);
    for g in groups {
        assert!(!g.skills.is_empty());
    }

    assert_eq!(content::contact_links().len(), 3);
}

#[test]
fn reveal_spec_defaults() {
    let spec = crate::app::reveal_spec();
    assert_eq!(spec.threshold, 0.1);
    assert_eq!(spec.offset, 20.0);
}

#[test]
fn scroll_through_reveals_every_section() {
    let mut cfg = HeadlessConfig::default().with_title(content::TITLE);
    cfg.size = (1280, 800);
    cfg.frames = 240;
    cfg.scroll_step = 80.0;

    let report = HeadlessRunner::new(cfg).run(app);

    assert_eq!(report.title, content::TITLE);
    assert!(report.scrolled > 500.0, "the page is taller than the viewport");

    // Every hyperlink of the original page is on the frame
    assert_eq!(report.links.len(), 8);
    let hrefs: HashSet<&str> = report.links.iter().map(|l| l.href.as_str()).collect();
    for expected in [
        content::MAILTO,
        content::GITHUB_URL,
        content::LINKEDIN_URL,
        content::PHONE_TEL,
    ] {
        assert!(hrefs.contains(expected), "missing {expected}");
    }
    for p in content::projects() {
        assert!(hrefs.contains(p.url), "missing {}", p.url);
    }

    // After the scroll-through every section has fully revealed
    for needle in [
        "Haashir Nawaz",
        "Featured Projects",
        "Skills & Technologies",
        "Let's Connect",
    ] {
        assert_eq!(
            text_alpha(&report.scene, needle),
            Some(255),
            "'{needle}' should be fully visible",
        );
    }
}

#[test]
fn page_fails_open_without_observation() {
    // Compose once with no Intersections capability installed: the sections
    // must come up visible rather than waiting for events that cannot arrive.
    let mut sched = Scheduler::new();
    sched.size = (1280, 800);

    let frame = sched.compose(app, |v, size| folio_ui::layout_and_paint(v, size, 1.0));

    assert_eq!(text_alpha(&frame.scene, "Let's Connect"), Some(255));
    assert_eq!(text_alpha(&frame.scene, "Featured Projects"), Some(255));
}
