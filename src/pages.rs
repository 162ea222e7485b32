//! Screen navigation.
//!
//! The app starts on the splash, moves to the catalog when the splash
//! completes, and opens a demo from there. Back navigation walks the same
//! path in reverse. The debug page is an overlay toggled from anywhere and is
//! tracked separately by the main loop.
//!
//! ```text
//! Splash ──(finished)──▶ Catalog ──(select)──▶ DockedFab
//!                          ▲                      │
//!                          └──────(back)──────────┘
//! ```

/// Screens of the catalog app.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Animated logo over a particle field.
    #[default]
    Splash,

    /// List of available demos.
    Catalog,

    /// Bottom app bar with a docked FAB that hides on scroll.
    DockedFab,
}

impl Page {
    /// Page reached by back navigation. `None` means leave the app.
    #[inline]
    pub const fn back(self) -> Option<Self> {
        match self {
            Self::Splash | Self::Catalog => None,
            Self::DockedFab => Some(Self::Catalog),
        }
    }

    /// Title shown in the top app bar.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Catalog => "Expressive Catalog",
            Self::DockedFab => "Expressive Docked FAB",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Splash);
    }

    #[test]
    fn test_back_navigation() {
        assert_eq!(Page::DockedFab.back(), Some(Page::Catalog));
        assert_eq!(Page::Catalog.back(), None, "Back from the catalog exits");
        assert_eq!(Page::Splash.back(), None);
    }

    #[test]
    fn test_titles() {
        assert!(Page::Splash.title().is_empty(), "Splash has no top bar");
        assert_eq!(Page::DockedFab.title(), "Expressive Docked FAB");
    }
}
