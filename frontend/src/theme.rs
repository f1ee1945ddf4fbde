//! Light/dark theme switch.
//!
//! The theme lives in the page itself as the presence of the `dark-mode`
//! class on `<body>`. Every load starts light; nothing is persisted.

use std::fmt;

use folio_shared::markers::DARK_MODE_CLASS;

use crate::surface::PageSurface;

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// No `dark-mode` class on `<body>`.
    #[default]
    Light,
    /// `dark-mode` class present on `<body>`.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme currently shown by the page.
    pub fn of<S: PageSurface>(surface: &S) -> Self {
        if surface.root_has_class(DARK_MODE_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Make the page show this theme.
    pub fn apply<S: PageSurface>(self, surface: &S) {
        surface.set_root_class(DARK_MODE_CLASS, self == Theme::Dark);
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Switch the page to the other theme and return it.
pub fn toggle<S: PageSurface>(surface: &S) -> Theme {
    let next = Theme::of(surface).toggled();
    next.apply(surface);
    tracing::debug!(theme = %next, "theme toggled");
    next
}
