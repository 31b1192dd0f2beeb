#![allow(non_snake_case)]

use folio_core::prelude::*;
use folio_ui::*;

/// Centered column capped at content width.
pub fn Page(body: View) -> View {
    Row(Modifier::new().fill_max_width()).child((
        Spacer(),
        Box(Modifier::new().fill_max_width().max_width(1100.0)).child(body),
        Spacer(),
    ))
}

/// A titled section with a centered heading.
pub fn Section(title: &str, body: View) -> View {
    Column(Modifier::new().padding(8.0)).child((
        Row(Modifier::new().fill_max_width()).child((
            Spacer(),
            Text(title).size(28.0).color(theme().on_surface),
            Spacer(),
        )),
        VSpace(28.0),
        body,
    ))
}

/// Card surface in the page's visual language.
pub fn Card(modifier: Modifier, body: View) -> View {
    Column(
        modifier
            .background(theme().surface)
            .border(1.0, theme().outline, 14.0)
            .clip_rounded(14.0)
            .padding(20.0),
    )
    .child(body)
}

pub fn Badge(label: impl Into<String>) -> View {
    Box(Modifier::new()
        .background(theme().muted)
        .clip_rounded(10.0)
        .padding(6.0))
    .child(Text(label).size(12.0).color(theme().on_surface))
}

/// Wrapping row of badges.
pub fn BadgeRow(items: &[&str]) -> View {
    Row(Modifier::new().flex_wrap(FlexWrap::Wrap)).child(
        items
            .iter()
            .map(|s| Box(Modifier::new().padding(3.0)).child(Badge(*s)))
            .collect::<Vec<_>>(),
    )
}

/// Placeholder panel where the project screenshot would render.
pub fn Thumbnail(label: &str) -> View {
    Box(Modifier::new()
        .fill_max_width()
        .aspect_ratio(16.0 / 9.0)
        .background(theme().muted)
        .clip_rounded(10.0)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .child(Text(label).size(14.0).color(theme().on_muted))
}

/// Vertical gap.
pub fn VSpace(h: f32) -> View {
    Box(Modifier::new().height(h).width(1.0))
}
