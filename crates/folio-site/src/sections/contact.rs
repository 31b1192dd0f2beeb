use folio_core::prelude::*;
use folio_ui::*;

use crate::content;
use crate::ui::{Card, VSpace};

pub fn screen() -> View {
    let profile = content::profile();

    let mut link_row: Vec<View> = vec![Spacer()];
    for (i, l) in content::contact_links().iter().enumerate() {
        if i > 0 {
            link_row.push(Box(Modifier::new().width(12.0).height(1.0)));
        }
        link_row.push(Link(l.label, l.href));
    }
    link_row.push(Spacer());

    Card(
        Modifier::new().fill_max_width(),
        Column(Modifier::new().fill_max_width()).child((
            Row(Modifier::new().fill_max_width()).child((
                Spacer(),
                Text("Let's Connect").size(26.0).color(theme().on_surface),
                Spacer(),
            )),
            VSpace(6.0),
            Row(Modifier::new().fill_max_width()).child((
                Spacer(),
                Text(profile.availability).size(14.0).color(theme().on_muted),
                Spacer(),
            )),
            VSpace(18.0),
            Row(Modifier::new().fill_max_width()).child(link_row),
            VSpace(16.0),
            Row(Modifier::new().fill_max_width()).child((
                Spacer(),
                Text(profile.location).size(14.0).color(theme().on_muted),
                Spacer(),
            )),
        )),
    )
}
