//! Badge registry.
//!
//! Badges are short annotations ("New", "Beta") attached to sidebar entries.
//! The set of variants is closed: anything outside [`BadgeVariant::ALL`] is
//! rejected during validation rather than mapped to a fallback.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Semantic badge variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Neutral badge, used when no variant is given.
    Default,
    /// Informational.
    Note,
    /// Helpful hint.
    Tip,
    /// Positive (e.g. "Start Here").
    Success,
    /// Warning (e.g. "Coming Soon").
    Caution,
    /// Destructive or deprecated.
    Danger,
}

impl BadgeVariant {
    /// Every recognized variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Note,
        Self::Tip,
        Self::Success,
        Self::Caution,
        Self::Danger,
    ];

    /// Configuration name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Success => "success",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized variant name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown badge variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for BadgeVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Check whether `name` is a recognized badge variant.
///
/// Matching is exact: `"Success"` is not `"success"`.
#[must_use]
pub fn is_valid_variant(name: &str) -> bool {
    name.parse::<BadgeVariant>().is_ok()
}

/// Names of all recognized badge variants.
#[must_use]
pub fn all_variants() -> Vec<&'static str> {
    BadgeVariant::ALL.iter().map(|v| v.as_str()).collect()
}

/// Validated badge attached to a navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    text: String,
    variant: BadgeVariant,
}

impl Badge {
    /// Create a badge.
    pub fn new(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }

    /// Badge text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Badge variant.
    #[must_use]
    pub fn variant(&self) -> BadgeVariant {
        self.variant
    }
}
