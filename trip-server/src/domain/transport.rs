//! Transport option types.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Price;

/// Identifier for a transport option.
///
/// Unique within the transport category; the catalog may reuse the same
/// numeric value for a stay or an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransportId(pub u32);

impl fmt::Display for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Means of travel for a transport leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
        };
        f.write_str(label)
    }
}

/// A bookable transport leg returned by the catalog.
///
/// Equality and hashing are identity-based: two options with the same `id`
/// represent the same catalog entry, regardless of their other fields. This
/// lets freshly fetched copies match older copies whose descriptive data has
/// since changed.
#[derive(Debug, Clone)]
pub struct TransportOption {
    pub id: TransportId,
    pub mode: TransportMode,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    /// Door-to-door travel time.
    pub duration_minutes: u32,
    pub price: Price,
}

impl PartialEq for TransportOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TransportOption {}

impl Hash for TransportOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
