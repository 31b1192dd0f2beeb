use folio_core::{Color, Theme};

/// Dark palette for the page: near-black zinc layers with a light accent.
pub fn portfolio_theme() -> Theme {
    Theme {
        background: Color::from_hex("#09090B"),
        surface: Color::from_hex("#18181B"),
        on_surface: Color::from_hex("#FAFAFA"),
        primary: Color::from_hex("#FAFAFA"),
        on_primary: Color::from_hex("#18181B"),
        muted: Color::from_hex("#27272A"),
        on_muted: Color::from_hex("#A1A1AA"),
        outline: Color::from_hex("#27272A"),
    }
}
