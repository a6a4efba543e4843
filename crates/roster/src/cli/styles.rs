//! Terminal styles for the roster CLI.
//!
//! Output code asks for semantic styles (`id`, `inactive`, `warning`, ...)
//! and never picks colors itself. Each [`ResolvedTheme`] maps those names to
//! concrete colors, so light and dark terminals only differ here.
//!
//! The theme comes from the user's stored preference. `system` is resolved
//! with the `dark-light` crate at startup.

use console::Style;
use rosterapp::theme::ResolvedTheme;

#[derive(Debug, Clone)]
pub struct Palette {
    pub header: Style,
    pub id: Style,
    pub regular: Style,
    pub muted: Style,
    pub active: Style,
    pub inactive: Style,
    pub success: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => light(),
            ResolvedTheme::Dark => dark(),
        }
    }

    /// No colors or decoration at all.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            id: Style::new(),
            regular: Style::new(),
            muted: Style::new(),
            active: Style::new(),
            inactive: Style::new(),
            success: Style::new(),
            info: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }
}

/// Whether the host terminal is in dark mode.
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}

fn light() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(244);
    Palette {
        header: regular.clone().bold(),
        id: Style::new().color256(136),
        regular,
        muted: muted.clone(),
        active: Style::new().color256(28),
        inactive: muted.clone().italic(),
        success: Style::new().green(),
        info: muted,
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
    }
}

fn dark() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(249);
    Palette {
        header: regular.clone().bold(),
        id: Style::new().color256(220),
        regular,
        muted: muted.clone(),
        active: Style::new().color256(120),
        inactive: Style::new().color256(242).italic(),
        success: Style::new().green(),
        info: muted,
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
    }
}
