use folio_core::prelude::*;
use folio_ui::reveal::Reveal;
use folio_ui::scroll::{ScrollArea, remember_scroll_state};
use folio_ui::*;

use crate::sections;
use crate::theme::portfolio_theme;
use crate::ui::{Page, VSpace};

pub fn app(_s: &mut Scheduler) -> View {
    let scroll = remember_scroll_state("page");

    with_theme(portfolio_theme(), || {
        let spec = reveal_spec();

        Surface(
            Modifier::new()
                .fill_max_size()
                .background(theme().background),
            ScrollArea(
                Modifier::new().fill_max_size(),
                scroll,
                Column(Modifier::new().fill_max_width()).child((
                    sections::hero::screen(),
                    VSpace(48.0),
                    Page(Column(Modifier::new().fill_max_width()).child((
                        Reveal("projects", spec, sections::projects::screen()),
                        VSpace(72.0),
                        Reveal("skills", spec, sections::skills::screen()),
                        VSpace(72.0),
                        Reveal("contact", spec, sections::contact::screen()),
                        VSpace(96.0),
                    ))),
                )),
            ),
        )
    })
}

/// Reveal tuning for the page sections. The trigger threshold can be
/// overridden with `FOLIO_REVEAL_THRESHOLD`; bad overrides are logged and
/// ignored.
pub fn reveal_spec() -> RevealSpec {
    let mut spec = RevealSpec::default();
    if let Ok(raw) = std::env::var("FOLIO_REVEAL_THRESHOLD")
        && let Ok(v) = raw.parse::<f32>()
    {
        spec.threshold = v;
    }
    match spec.validated() {
        Ok(spec) => spec,
        Err(err) => {
            log::warn!("ignoring reveal threshold override: {err}");
            RevealSpec::default()
        }
    }
}
