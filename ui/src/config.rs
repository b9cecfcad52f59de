//! Caller-supplied navbar content.
//!
//! The navbar never validates entries: an empty `link` renders an anchor that
//! goes nowhere, and any number of items may be flagged `active`.

use serde::{Deserialize, Serialize};

const BUNDLED_NAVBAR_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/navbar.json"
));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("navbar configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry in the navigation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
    #[serde(default)]
    pub active: bool,
    /// Extra classes appended to this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active: false,
            class: None,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_brand_href")]
    pub brand_href: String,
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    pub button_text: String,
    /// Extra classes for the auth-dependent controls (Log In link, account trigger).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default = "default_login_href")]
    pub login_href: String,
}

fn default_brand() -> String {
    "FusionX".to_string()
}

fn default_brand_href() -> String {
    "/".to_string()
}

fn default_login_href() -> String {
    "/Login".to_string()
}

impl NavbarConfig {
    pub fn new(nav_items: Vec<NavItem>, button_text: impl Into<String>) -> Self {
        Self {
            brand: default_brand(),
            brand_href: default_brand_href(),
            nav_items,
            button_text: button_text.into(),
            class: None,
            login_href: default_login_href(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The navbar content shipped with the site (`assets/navbar.json`).
    pub fn fusionx() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_NAVBAR_JSON)
    }

    /// Bundled content, or an empty bar if it fails to parse.
    pub fn load_bundled() -> Self {
        Self::fusionx().unwrap_or_else(|err| {
            tracing::error!(%err, "bundled navbar configuration is invalid");
            Self::new(Vec::new(), "Get Started")
        })
    }
}
