//! Where injected elements are attached.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Parent element for injected `<script>` tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionPoint {
    /// `document.head` (default)
    #[default]
    Head,
    /// `document.body`
    Body,
}

impl InsertionPoint {
    /// Tag name of the parent element.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for InsertionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for InsertionPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "body" => Ok(Self::Body),
            other => Err(format!("unknown insertion point '{}'", other)),
        }
    }
}
