//! Navbar logic kept apart from rendering: the state machine, the scoped
//! listener session and the view model the component draws from.

mod session;
mod state;
mod view;

pub use session::{NavbarSession, NavDispatch};
pub use state::{AccountMenu, NavEvent, NavbarState, SignOutStatus};
pub use view::{nav_links, MenuGlyph, NavLinkView, NavbarView, AUTH_CONTROL_CLASS};
