use serde::{Deserialize, Serialize};

/// Whether a link list is embedded in other content only.
///
/// Stored as a nullable boolean: lists saved before the flag existed carry
/// no value and are treated as globally visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Locality {
    /// No value stored (legacy lists). Listed like a global list.
    #[default]
    Unset,
    /// Explicitly global: listed everywhere.
    Global,
    /// Local to the content that references it: hidden from listings,
    /// still loadable by id.
    Local,
}

impl Locality {
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(self, Locality::Local)
    }

    /// Nullable boolean column value.
    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Locality::Unset => None,
            Locality::Global => Some(false),
            Locality::Local => Some(true),
        }
    }
}

impl From<Option<bool>> for Locality {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Locality::Unset,
            Some(false) => Locality::Global,
            Some(true) => Locality::Local,
        }
    }
}

impl From<Locality> for Option<bool> {
    fn from(value: Locality) -> Self {
        value.as_flag()
    }
}
