use folio_core::prelude::*;
use folio_ui::*;

use crate::content::{self, Project};
use crate::ui::{BadgeRow, Card, Section, Thumbnail, VSpace};

pub fn screen() -> View {
    let cards = content::projects().iter().map(project_card).collect();

    Section(
        "Featured Projects",
        Grid(
            2,
            Modifier::new().fill_max_width().padding(8.0),
            cards,
            24.0,
            24.0,
        ),
    )
}

fn project_card(p: &Project) -> View {
    let mut m = Modifier::new().fill_max_width();
    if p.wide {
        m = m.grid_span(2, 1);
    }

    Card(
        m,
        Column(Modifier::new().fill_max_width()).child(vec![
            Text(p.title).size(20.0).color(theme().on_surface),
            VSpace(4.0),
            Text(p.subtitle).size(14.0).color(theme().on_muted),
            VSpace(12.0),
            Thumbnail(p.title),
            VSpace(12.0),
            Text(p.blurb).size(16.0).color(theme().on_muted).wrap(),
            VSpace(12.0),
            BadgeRow(p.stack),
            VSpace(12.0),
            Link("View Project", p.url),
        ]),
    )
}
