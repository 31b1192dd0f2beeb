use folio_core::prelude::*;
use folio_ui::*;

use crate::content::{self, SkillGroup};
use crate::ui::{BadgeRow, Card, Section, VSpace};

pub fn screen() -> View {
    let cards = content::skill_groups().iter().map(group_card).collect();

    Section(
        "Skills & Technologies",
        Grid(
            4,
            Modifier::new().fill_max_width().padding(8.0),
            cards,
            16.0,
            16.0,
        ),
    )
}

fn group_card(g: &SkillGroup) -> View {
    Card(
        Modifier::new().fill_max_width(),
        Column(Modifier::new().fill_max_width()).child((
            Text(g.title).size(18.0).color(theme().on_surface),
            VSpace(10.0),
            BadgeRow(g.skills),
        )),
    )
}
