#![allow(non_snake_case)]
//! Widgets, layout and paint.
//!
//! Views are cheap descriptions; [`layout_and_paint`] turns a tree into a
//! [`Scene`] plus the page's link regions and scroll handles. Layout is
//! Taffy flexbox/grid; text sizing is a grapheme-count heuristic (there is
//! no shaping backend behind the headless seam).

pub mod reveal;
pub mod scroll;
#[cfg(test)]
mod tests;

use std::collections::HashMap;

use folio_core::*;
use smallvec::SmallVec;
use taffy::style::{Display, Style};
use taffy::{Overflow, Point};
use unicode_segmentation::UnicodeSegmentation;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: 16.0, // dp (converted to px in layout/paint)
            soft_wrap: false,
        },
    )
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

/// Hyperlink, drawn as a labeled pill. The href rides along on the frame's
/// link regions; opening it is the host's job.
pub fn Link(label: impl Into<String>, href: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Link {
            label: label.into(),
            href: href.into(),
            color: theme().on_surface,
        },
    )
}

pub fn Grid(
    columns: usize,
    modifier: Modifier,
    children: Vec<View>,
    row_gap: f32,
    column_gap: f32,
) -> View {
    Column(modifier.grid(columns, row_gap, column_gap)).with_children(children)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Method styling for `Text`
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp_font: f32) -> View;
    fn wrap(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }

    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = dp_font;
        }
        self
    }

    fn wrap(mut self) -> View {
        if let ViewKind::Text { soft_wrap, .. } = &mut self.kind {
            *soft_wrap = true;
        }
        self
    }
}

const LINK_FONT_DP: f32 = 16.0;
const LINK_PAD_X_DP: f32 = 14.0;
const LINK_HEIGHT_DP: f32 = 38.0;
const GLYPH_WIDTH_FACTOR: f32 = 0.6;
const LINE_HEIGHT_FACTOR: f32 = 1.3;

fn text_width_px(s: &str, size_px: f32) -> f32 {
    s.graphemes(true).count() as f32 * size_px * GLYPH_WIDTH_FACTOR
}

type Lines = SmallVec<[String; 4]>;

/// Greedy word wrap against the estimated glyph width.
fn wrap_lines(text: &str, size_px: f32, max_w_px: f32) -> Lines {
    let mut lines: Lines = SmallVec::new();
    if !max_w_px.is_finite() || max_w_px <= 0.0 {
        lines.push(text.to_string());
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_px(&candidate, size_px) <= max_w_px || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

#[derive(Clone)]
struct TextLayout {
    lines: Lines,
    size_px: f32,
    line_h_px: f32,
}

/// Layout the view tree at `size_px_u32` and paint it. Returns the scene,
/// every hyperlink's resolved region, and the scroll handles for input
/// dispatch. `scale` is the dp→px multiplier.
pub fn layout_and_paint(
    root: &View,
    size_px_u32: (u32, u32),
    scale: f32,
) -> (Scene, Vec<LinkRegion>, Vec<ScrollHandle>) {
    use taffy::prelude::*;

    let px = move |dp_val: f32| dp_val * scale;

    // Assign ids
    let mut id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut id);

    #[derive(Clone)]
    enum NodeCtx {
        Text {
            text: String,
            font_dp: f32,
            soft_wrap: bool,
        },
        Link {
            label: String,
        },
        Container,
    }

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut nodes_map: HashMap<ViewId, taffy::NodeId> = HashMap::new();
    let mut text_cache: HashMap<taffy::NodeId, TextLayout> = HashMap::new();

    fn style_from_modifier(m: &Modifier, kind: &ViewKind, px: &dyn Fn(f32) -> f32) -> Style {
        use taffy::prelude::*;

        let mut s = Style::default();

        s.display = Display::Flex;
        if matches!(
            kind,
            ViewKind::Column
                | ViewKind::Surface
                | ViewKind::ScrollV { .. }
                | ViewKind::Region { .. }
        ) {
            s.flex_direction = FlexDirection::Column;
        }

        // Containers stretch their children on the cross axis by default
        s.align_items = if matches!(
            kind,
            ViewKind::Row
                | ViewKind::Column
                | ViewKind::Surface
                | ViewKind::ScrollV { .. }
                | ViewKind::Region { .. }
        ) {
            Some(AlignItems::Stretch)
        } else {
            Some(AlignItems::FlexStart)
        };
        s.justify_content = Some(JustifyContent::FlexStart);

        if let Some(r) = m.aspect_ratio {
            s.aspect_ratio = Some(r.max(0.0));
        }

        if let Some(g) = m.flex_grow {
            s.flex_grow = g;
        }
        if let Some(sh) = m.flex_shrink {
            s.flex_shrink = sh;
        }
        if let Some(w) = m.flex_wrap {
            s.flex_wrap = w;
        }
        if let Some(a) = m.align_self {
            s.align_self = Some(a);
        }
        if let Some(j) = m.justify_content {
            s.justify_content = Some(j);
        }
        if let Some(a) = m.align_items_container {
            s.align_items = Some(a);
        }

        if let Some(cfg) = &m.grid {
            s.display = Display::Grid;
            s.grid_template_columns = (0..cfg.columns.max(1))
                .map(|_| GridTemplateComponent::Single(flex(1.0)))
                .collect();
            s.gap = taffy::geometry::Size {
                width: length(px(cfg.column_gap)),
                height: length(px(cfg.row_gap)),
            };
        }

        if matches!(kind, ViewKind::ScrollV { .. }) {
            s.overflow = Point {
                x: Overflow::Hidden,
                y: Overflow::Hidden,
            };
        }

        if let Some(p_dp) = m.padding {
            let v = length(px(p_dp));
            s.padding = taffy::geometry::Rect {
                left: v,
                right: v,
                top: v,
                bottom: v,
            };
        }

        // Explicit size — highest priority
        let mut width_set = false;
        let mut height_set = false;
        if let Some(sz_dp) = m.size {
            if sz_dp.width.is_finite() {
                s.size.width = length(px(sz_dp.width.max(0.0)));
                width_set = true;
            }
            if sz_dp.height.is_finite() {
                s.size.height = length(px(sz_dp.height.max(0.0)));
                height_set = true;
            }
        }
        if let Some(w_dp) = m.width {
            s.size.width = length(px(w_dp.max(0.0)));
            width_set = true;
        }
        if let Some(h_dp) = m.height {
            s.size.height = length(px(h_dp.max(0.0)));
            height_set = true;
        }

        // Fill resolves as a percent of the parent's content box; against an
        // indefinite axis it degrades to auto. A user max clamp still wins.
        let want_fill_w = m.fill_max || m.fill_max_w;
        let want_fill_h = m.fill_max || m.fill_max_h;
        if want_fill_w && !width_set {
            s.size.width = percent(1.0);
        }
        if want_fill_h && !height_set {
            s.size.height = percent(1.0);
        }

        // user min/max clamps
        if let Some(v_dp) = m.min_width {
            s.min_size.width = length(px(v_dp.max(0.0)));
        }
        if let Some(v_dp) = m.min_height {
            s.min_size.height = length(px(v_dp.max(0.0)));
        }
        if let Some(v_dp) = m.max_width {
            s.max_size.width = length(px(v_dp.max(0.0)));
        }
        if let Some(v_dp) = m.max_height {
            s.max_size.height = length(px(v_dp.max(0.0)));
        }

        s
    }

    fn build_node(
        v: &View,
        t: &mut TaffyTree<NodeCtx>,
        nodes_map: &mut HashMap<ViewId, taffy::NodeId>,
        px: &dyn Fn(f32) -> f32,
    ) -> taffy::NodeId {
        use taffy::prelude::{GridPlacement, Line};

        let mut style = style_from_modifier(&v.modifier, &v.kind, px);

        if v.modifier.grid_col_span.is_some() || v.modifier.grid_row_span.is_some() {
            let col_span = v.modifier.grid_col_span.unwrap_or(1).max(1);
            let row_span = v.modifier.grid_row_span.unwrap_or(1).max(1);
            style.grid_column = Line {
                start: GridPlacement::Auto,
                end: GridPlacement::Span(col_span),
            };
            style.grid_row = Line {
                start: GridPlacement::Auto,
                end: GridPlacement::Span(row_span),
            };
        }

        let node = match &v.kind {
            ViewKind::Text {
                text,
                font_size: font_dp,
                soft_wrap,
                ..
            } => t
                .new_leaf_with_context(
                    style,
                    NodeCtx::Text {
                        text: text.clone(),
                        font_dp: *font_dp,
                        soft_wrap: *soft_wrap,
                    },
                )
                .unwrap(),
            ViewKind::Link { label, .. } => t
                .new_leaf_with_context(
                    style,
                    NodeCtx::Link {
                        label: label.clone(),
                    },
                )
                .unwrap(),
            _ => {
                let children: Vec<_> = v
                    .children
                    .iter()
                    .map(|c| build_node(c, t, nodes_map, px))
                    .collect();
                let n = t.new_with_children(style, &children).unwrap();
                t.set_node_context(n, Some(NodeCtx::Container)).ok();
                n
            }
        };

        nodes_map.insert(v.id, node);
        node
    }

    let root_node = build_node(&root, &mut taffy, &mut nodes_map, &px);

    {
        let mut rs = taffy.style(root_node).unwrap().clone();
        rs.size.width = length(size_px_u32.0 as f32);
        rs.size.height = length(size_px_u32.1 as f32);
        taffy.set_style(root_node, rs).unwrap();
    }

    let available = taffy::geometry::Size {
        width: AvailableSpace::Definite(size_px_u32.0 as f32),
        height: AvailableSpace::Definite(size_px_u32.1 as f32),
    };

    taffy
        .compute_layout_with_measure(root_node, available, |known, avail, node, ctx, _style| {
            match ctx {
                Some(NodeCtx::Text {
                    text,
                    font_dp,
                    soft_wrap,
                }) => {
                    let size_px_val = px(*font_dp);
                    let line_h_px_val = size_px_val * LINE_HEIGHT_FACTOR;

                    let approx_w_px = text_width_px(text, size_px_val);
                    let measured_w_px = known.width.unwrap_or(approx_w_px);

                    let wrap_w_px = if *soft_wrap {
                        match avail.width {
                            AvailableSpace::Definite(w) => w,
                            _ => measured_w_px,
                        }
                    } else {
                        measured_w_px
                    };

                    let lines: Lines = if *soft_wrap {
                        wrap_lines(text, size_px_val, wrap_w_px)
                    } else {
                        let mut l: Lines = SmallVec::new();
                        l.push(text.clone());
                        l
                    };
                    let n_lines = lines.len().max(1);
                    text_cache.insert(
                        node,
                        TextLayout {
                            lines,
                            size_px: size_px_val,
                            line_h_px: line_h_px_val,
                        },
                    );

                    taffy::geometry::Size {
                        width: measured_w_px.min(wrap_w_px),
                        height: line_h_px_val * n_lines as f32,
                    }
                }
                Some(NodeCtx::Link { label }) => taffy::geometry::Size {
                    width: text_width_px(label, px(LINK_FONT_DP)) + px(2.0 * LINK_PAD_X_DP),
                    height: px(LINK_HEIGHT_DP),
                },
                Some(NodeCtx::Container) | None => taffy::geometry::Size::ZERO,
            }
        })
        .unwrap();

    fn layout_of(node: taffy::NodeId, t: &TaffyTree<impl Clone>) -> folio_core::Rect {
        let l = t.layout(node).unwrap();
        folio_core::Rect {
            x: l.location.x,
            y: l.location.y,
            w: l.size.width,
            h: l.size.height,
        }
    }

    fn subtree_extents(node: taffy::NodeId, t: &TaffyTree<impl Clone>) -> (f32, f32) {
        let l = t.layout(node).unwrap();
        let mut w = l.size.width;
        let mut h = l.size.height;
        if let Ok(children) = t.children(node) {
            for &ch in children.iter() {
                let cl = t.layout(ch).unwrap();
                let (cw, chh) = subtree_extents(ch, t);
                w = w.max(cl.location.x + cw);
                h = h.max(cl.location.y + chh);
            }
        }
        (w, h)
    }

    let mut scene = Scene {
        clear_color: match root.modifier.background {
            Some(Brush::Solid(c)) => c,
            Some(Brush::Linear { start_color, .. }) => start_color,
            None => theme().background,
        },
        nodes: vec![],
    };
    let mut links: Vec<LinkRegion> = vec![];
    let mut scrolls: Vec<ScrollHandle> = vec![];

    #[allow(clippy::too_many_arguments)]
    fn walk(
        v: &View,
        t: &TaffyTree<NodeCtx>,
        nodes: &HashMap<ViewId, taffy::NodeId>,
        scene: &mut Scene,
        links: &mut Vec<LinkRegion>,
        scrolls: &mut Vec<ScrollHandle>,
        parent_offset_px: (f32, f32),
        alpha_accum: f32,
        text_cache: &HashMap<taffy::NodeId, TextLayout>,
        px: &dyn Fn(f32) -> f32,
    ) {
        let local = layout_of(nodes[&v.id], t);
        let rect = folio_core::Rect {
            x: local.x + parent_offset_px.0,
            y: local.y + parent_offset_px.1,
            w: local.w,
            h: local.h,
        };

        let content_rect = if let Some(p_dp) = v.modifier.padding {
            let p_px = px(p_dp);
            folio_core::Rect {
                x: rect.x + p_px,
                y: rect.y + p_px,
                w: (rect.w - 2.0 * p_px).max(0.0),
                h: (rect.h - 2.0 * p_px).max(0.0),
            }
        } else {
            rect
        };
        // Child locations from Taffy already include this node's padding.
        let base_px = (parent_offset_px.0 + local.x, parent_offset_px.1 + local.y);

        let alpha_accum = (alpha_accum * v.modifier.alpha.unwrap_or(1.0)).clamp(0.0, 1.0);

        let pushed_transform = match v.modifier.transform {
            Some(tf) if !tf.is_identity() => {
                scene.nodes.push(SceneNode::PushTransform { transform: tf });
                true
            }
            _ => false,
        };

        if let Some(bg) = v.modifier.background {
            scene.nodes.push(SceneNode::Rect {
                rect,
                brush: bg.mul_alpha(alpha_accum),
                radius: v.modifier.clip_rounded.map(px).unwrap_or(0.0),
            });
        }

        if let Some(b) = &v.modifier.border {
            scene.nodes.push(SceneNode::Border {
                rect,
                color: b.color.mul_alpha(alpha_accum),
                width: px(b.width),
                radius: px(b.radius.max(v.modifier.clip_rounded.unwrap_or(0.0))),
            });
        }

        match &v.kind {
            ViewKind::Text {
                text,
                color,
                font_size: font_dp,
                ..
            } => {
                let nid = nodes[&v.id];
                let (size_px_val, line_h_px_val, lines): (f32, f32, Lines) =
                    if let Some(tl) = text_cache.get(&nid) {
                        (tl.size_px, tl.line_h_px, tl.lines.clone())
                    } else {
                        let sz_px = px(*font_dp);
                        let mut l: Lines = SmallVec::new();
                        l.push(text.clone());
                        (sz_px, sz_px * LINE_HEIGHT_FACTOR, l)
                    };

                let mut draw_box = content_rect;
                // Vertical centering for a single line within the content box
                if lines.len() == 1 {
                    let dy_px = (draw_box.h - line_h_px_val) * 0.5;
                    if dy_px.is_finite() {
                        draw_box.y += dy_px.max(0.0);
                        draw_box.h = line_h_px_val;
                    }
                }

                for (i, ln) in lines.iter().enumerate() {
                    scene.nodes.push(SceneNode::Text {
                        rect: folio_core::Rect {
                            x: draw_box.x,
                            y: draw_box.y + i as f32 * line_h_px_val,
                            w: draw_box.w,
                            h: line_h_px_val,
                        },
                        text: ln.clone(),
                        color: color.mul_alpha(alpha_accum),
                        size: size_px_val,
                    });
                }
            }

            ViewKind::Link { label, href, color } => {
                let label_px = px(LINK_FONT_DP);
                let approx_w_px = text_width_px(label, label_px);
                let tx = rect.x + (rect.w - approx_w_px).max(0.0) * 0.5;
                let ty = rect.y + (rect.h - label_px).max(0.0) * 0.5;
                scene.nodes.push(SceneNode::Text {
                    rect: folio_core::Rect {
                        x: tx,
                        y: ty,
                        w: approx_w_px,
                        h: label_px,
                    },
                    text: label.clone(),
                    color: color.mul_alpha(alpha_accum),
                    size: label_px,
                });
                links.push(LinkRegion {
                    id: v.id,
                    rect,
                    label: label.clone(),
                    href: href.clone(),
                });
            }

            ViewKind::ScrollV {
                on_scroll,
                set_viewport_height,
                set_content_height,
                get_scroll_offset,
            } => {
                let vp = content_rect;
                if let Some(cb) = on_scroll {
                    scrolls.push(ScrollHandle {
                        id: v.id,
                        rect,
                        on_scroll: cb.clone(),
                    });
                }
                if let Some(set_vh) = set_viewport_height {
                    set_vh(vp.h.max(0.0));
                }

                let mut content_h_px = 0.0f32;
                for c in &v.children {
                    let nid = nodes[&c.id];
                    let l = t.layout(nid).unwrap();
                    let (_, ch) = subtree_extents(nid, t);
                    content_h_px = content_h_px.max(l.location.y + ch);
                }
                if let Some(set_ch) = set_content_height {
                    set_ch(content_h_px);
                }

                scene.nodes.push(SceneNode::PushClip {
                    rect: vp,
                    radius: 0.0,
                });

                let off_px = get_scroll_offset.as_ref().map(|g| g()).unwrap_or(0.0);
                let child_offset_px = (base_px.0, base_px.1 - off_px);
                for c in &v.children {
                    walk(
                        c,
                        t,
                        nodes,
                        scene,
                        links,
                        scrolls,
                        child_offset_px,
                        alpha_accum,
                        text_cache,
                        px,
                    );
                }

                scene.nodes.push(SceneNode::PopClip);
            }

            ViewKind::Region { on_rect } => {
                if let Some(cb) = on_rect {
                    cb(rect);
                }
                let child_offset_px = base_px;
                for c in &v.children {
                    walk(
                        c,
                        t,
                        nodes,
                        scene,
                        links,
                        scrolls,
                        child_offset_px,
                        alpha_accum,
                        text_cache,
                        px,
                    );
                }
            }

            _ => {
                let child_offset_px = base_px;
                for c in &v.children {
                    walk(
                        c,
                        t,
                        nodes,
                        scene,
                        links,
                        scrolls,
                        child_offset_px,
                        alpha_accum,
                        text_cache,
                        px,
                    );
                }
            }
        }

        if pushed_transform {
            scene.nodes.push(SceneNode::PopTransform);
        }
    }

    walk(
        &root,
        &taffy,
        &nodes_map,
        &mut scene,
        &mut links,
        &mut scrolls,
        (0.0, 0.0),
        1.0,
        &text_cache,
        &px,
    );

    (scene, links, scrolls)
}
