use folio_core::prelude::*;
use folio_ui::{reveal::Entrance, *};
use web_time::Duration;

use crate::content;
use crate::ui::VSpace;

fn centered(v: View) -> View {
    Row(Modifier::new().fill_max_width()).child((Spacer(), v, Spacer()))
}

pub fn screen() -> View {
    let profile = content::profile();

    Column(
        Modifier::new()
            .fill_max_width()
            .background_brush(LinearGradient::vertical(
                theme().primary.with_alpha(26),
                theme().background,
            ))
            .padding(24.0),
    )
    .child((
        VSpace(88.0),
        // Name and tagline scale in first
        Entrance(
            "hero-title",
            RevealSpec {
                duration: Duration::from_millis(500),
                offset: 0.0,
                scale_from: 0.9,
                ..RevealSpec::default()
            },
            Column(Modifier::new().fill_max_width()).child((
                centered(Text(profile.name).size(56.0).color(theme().on_surface)),
                VSpace(12.0),
                centered(Text(profile.tagline).size(22.0).color(theme().on_muted)),
            )),
        ),
        VSpace(24.0),
        // Intro fades in shortly after
        Entrance(
            "hero-blurb",
            RevealSpec {
                delay: Duration::from_millis(200),
                offset: 0.0,
                ..RevealSpec::default()
            },
            centered(
                Box(Modifier::new().fill_max_width().max_width(640.0))
                    .child(Text(profile.blurb).size(17.0).color(theme().on_muted).wrap()),
            ),
        ),
        VSpace(28.0),
        // Calls to action rise in last
        Entrance(
            "hero-actions",
            RevealSpec::delayed(Duration::from_millis(400)),
            Row(Modifier::new().fill_max_width()).child((
                Spacer(),
                Link("Get in Touch", content::MAILTO),
                Box(Modifier::new().width(12.0).height(1.0)),
                Link("View GitHub", content::GITHUB_URL),
                Spacer(),
            )),
        ),
        VSpace(72.0),
    ))
}
