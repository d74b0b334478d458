use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque parcel identifier ("A", "B", "C", ...).
///
/// The navigation core treats parcel ids as tokens: it never validates
/// them, and an unknown id is passed through unmodified. Resolution to
/// actual parcel data is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(String);

impl ParcelId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParcelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
