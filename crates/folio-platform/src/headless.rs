use std::rc::Rc;

use folio_core::*;
use folio_ui::layout_and_paint;
use web_time::Instant;

use crate::config::HeadlessConfig;

/// What a headless session saw.
pub struct RunReport {
    pub title: String,
    pub frames: u32,
    /// Total scroll distance the page actually consumed, in pixels.
    pub scrolled: f32,
    /// Hyperlinks of the final frame.
    pub links: Vec<LinkRegion>,
    /// Scene of the final frame.
    pub scene: Scene,
}

/// Frame driver without a window: compose → layout/paint → deliver
/// intersections → dispatch scroll, on a virtual clock stepped by
/// `frame_interval`. Every run with the same config is identical.
pub struct HeadlessRunner {
    cfg: HeadlessConfig,
    scheduler: Scheduler,
    intersections: Intersections,
}

impl HeadlessRunner {
    pub fn new(cfg: HeadlessConfig) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.size = cfg.size;
        Self {
            cfg,
            scheduler,
            intersections: Intersections::new(),
        }
    }

    pub fn intersections(&self) -> Intersections {
        self.intersections.clone()
    }

    pub fn run(mut self, mut root: impl FnMut(&mut Scheduler) -> View) -> RunReport {
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            w: self.cfg.size.0 as f32,
            h: self.cfg.size.1 as f32,
        };
        let scale = self.cfg.scale;
        let start = Instant::now();

        log::info!(
            "headless session '{}': {} frames at {:?}/frame, viewport {}x{}",
            self.cfg.title,
            self.cfg.frames,
            self.cfg.frame_interval,
            self.cfg.size.0,
            self.cfg.size.1,
        );

        let mut scrolled = 0.0f32;
        let mut reached_end = false;
        let mut last: Option<Frame> = None;

        for frame_no in 0..self.cfg.frames {
            set_clock(Rc::new(TestClock {
                t: start + self.cfg.frame_interval * frame_no,
            }));

            let reg = self.intersections.clone();
            let frame = self.scheduler.compose(
                |s| with_intersections(reg.clone(), || root(s)),
                |view, size| layout_and_paint(view, size, scale),
            );

            // Visibility is judged on what this frame laid out.
            self.intersections.deliver(viewport);

            if let Some(handle) = frame.scrollables.first() {
                let leftover = (handle.on_scroll)(self.cfg.scroll_step);
                scrolled += self.cfg.scroll_step - leftover;
                if leftover > 0.0 && !reached_end {
                    reached_end = true;
                    log::debug!("reached the end of the page at frame {frame_no}");
                }
            }

            last = Some(frame);
        }

        reset_clock();

        let (links, scene) = match last {
            Some(frame) => (frame.links, frame.scene),
            None => (Vec::new(), Scene::default()),
        };

        log::info!(
            "session '{}' done: scrolled {scrolled:.0}px, {} links, {} scene nodes",
            self.cfg.title,
            links.len(),
            scene.nodes.len(),
        );

        self.scheduler.dispose();

        RunReport {
            title: self.cfg.title.clone(),
            frames: self.cfg.frames,
            scrolled,
            links,
            scene,
        }
    }
}
