use crate::constants::{FLAG_ALT_SUFFIX, PROVINCES, TERRITORIES};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Class of regions served by one API collection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Provinces,
    Territories,
}

impl Category {
    /// Path segment of the collection endpoint.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Provinces => PROVINCES,
            Self::Territories => TERRITORIES,
        }
    }

    /// Human-readable button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Provinces => "Provinces",
            Self::Territories => "Territories",
        }
    }
}

/// A province or territory as served by the API.
///
/// `name` is assumed unique within one response and doubles as the card identity.
/// Unknown fields are ignored; a missing `flagUrl` yields an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub capital: String,
    #[serde(default)]
    pub flag_url: String,
}

impl Region {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        flag_url: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), capital: capital.into(), flag_url: flag_url.into() }
    }

    /// Accessible label of the flag image, e.g. `Ontario's Flag`.
    #[must_use]
    pub fn flag_alt(&self) -> String {
        format!("{}{FLAG_ALT_SUFFIX}", self.name)
    }
}
