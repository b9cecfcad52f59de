//! Ephemeral navbar state and its transitions.
//!
//! Every host event (auth change, click, resize) becomes a [`NavEvent`] and is
//! folded into [`NavbarState`] in arrival order, so the rendered bar always
//! reflects the last event processed.

use crate::auth::{AuthError, AuthUser};
use crate::core::disclosure::Disclosure;
use crate::core::viewport;

/// Progress of the most recent "Log Out" request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignOutStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    AuthChanged(Option<AuthUser>),
    DropdownTriggerClicked,
    /// Press landed inside the account dropdown subtree. Element handlers run
    /// before the document listener, so this precedes `DocumentPointerDown`.
    DropdownPointerDown,
    DocumentPointerDown,
    MobileTriggerClicked,
    Resized(f64),
    SignOutStarted,
    SignOutSettled(Result<(), AuthError>),
}

/// Which account control sits at the end of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMenu {
    LoginLink,
    Dropdown { open: bool },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavbarState {
    pub user: Option<AuthUser>,
    pub dropdown: Disclosure,
    pub mobile_nav: Disclosure,
    pub sign_out: SignOutStatus,
    pointer_in_dropdown: bool,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::AuthChanged(user) => self.user = user,
            NavEvent::DropdownTriggerClicked => self.dropdown = self.dropdown.toggle(),
            NavEvent::DropdownPointerDown => self.pointer_in_dropdown = true,
            NavEvent::DocumentPointerDown => {
                if !std::mem::take(&mut self.pointer_in_dropdown) {
                    self.dropdown = self.dropdown.force_close();
                }
            }
            NavEvent::MobileTriggerClicked => self.mobile_nav = self.mobile_nav.toggle(),
            NavEvent::Resized(width) => {
                if viewport::is_wide(width) {
                    self.mobile_nav = self.mobile_nav.force_close();
                }
            }
            NavEvent::SignOutStarted => self.sign_out = SignOutStatus::Pending,
            NavEvent::SignOutSettled(Ok(())) => self.sign_out = SignOutStatus::Idle,
            NavEvent::SignOutSettled(Err(err)) => {
                self.sign_out = SignOutStatus::Failed(err.to_string())
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn account_menu(&self) -> AccountMenu {
        match self.user {
            Some(_) => AccountMenu::Dropdown {
                open: self.dropdown.is_open(),
            },
            None => AccountMenu::LoginLink,
        }
    }
}
