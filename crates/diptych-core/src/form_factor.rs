//! Device idiom detection.
//!
//! The controller asks a [`FormFactorProvider`] which idiom it is laying out
//! for instead of probing the platform itself, so tests and headless hosts
//! can pick either idiom without a real device.

use serde::{Deserialize, Serialize};

/// Device class the controller lays out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Idiom {
    /// Large screen: master and detail can share the screen.
    #[default]
    Pad,
    /// Small screen: one full-screen pane at a time, detail is pushed.
    Phone,
}

impl Idiom {
    /// Whether this is the large-screen idiom.
    pub fn is_pad(self) -> bool {
        self == Self::Pad
    }

    /// Whether this is the small-screen idiom.
    pub fn is_phone(self) -> bool {
        self == Self::Phone
    }
}

impl std::fmt::Display for Idiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pad => write!(f, "pad"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// Source of the current device idiom.
///
/// Queried at construction and again on every rotation, so a provider may
/// legitimately change its answer over the controller's lifetime.
pub trait FormFactorProvider {
    /// The idiom to lay out for right now.
    fn idiom(&self) -> Idiom;
}

/// Provider that always reports the same idiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFormFactor(pub Idiom);

impl FixedFormFactor {
    /// A provider pinned to the large-screen idiom.
    pub fn pad() -> Self {
        Self(Idiom::Pad)
    }

    /// A provider pinned to the small-screen idiom.
    pub fn phone() -> Self {
        Self(Idiom::Phone)
    }
}

impl FormFactorProvider for FixedFormFactor {
    fn idiom(&self) -> Idiom {
        self.0
    }
}

impl From<Idiom> for FixedFormFactor {
    fn from(idiom: Idiom) -> Self {
        Self(idiom)
    }
}
