//! Lodging option types.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Price;

/// Identifier for a stay option, unique within the stay category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StayId(pub u32);

impl fmt::Display for StayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable place to stay for the whole trip.
///
/// Equality and hashing are identity-based, matching the other option
/// categories: same `id` means the same catalog entry.
#[derive(Debug, Clone)]
pub struct StayOption {
    pub id: StayId,
    pub name: String,
    pub location: String,
    /// Total price for the stay, not per night.
    pub price: Price,
}

impl PartialEq for StayOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StayOption {}

impl Hash for StayOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_id() {
        let a = StayOption {
            id: StayId(3),
            name: "Hotel Aurora".to_string(),
            location: "Rome".to_string(),
            price: Price::new(42_000),
        };
        let b = StayOption {
            id: StayId(3),
            name: "Renamed Hotel".to_string(),
            location: "Rome".to_string(),
            price: Price::new(39_000),
        };
        let c = StayOption { id: StayId(4), ..a.clone() };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
