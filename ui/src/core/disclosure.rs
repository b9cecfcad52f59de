//! Two-state open/closed surfaces (account dropdown, mobile collapse).

/// Whether a collapsible surface is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    Open,
    #[default]
    Closed,
}

impl Disclosure {
    /// Flip between `Open` and `Closed`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Close regardless of the current value.
    pub fn force_close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// BEM modifier suffix, e.g. `navbar__collapse--open`.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}
