//! Luggage service option types.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Price;

/// Identifier for a luggage option, unique within the luggage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LuggageId(pub u32);

impl fmt::Display for LuggageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A luggage handling service (extra bag, shipping, storage).
///
/// Luggage options are never searched automatically; they are attached to an
/// itinerary by the caller. Equality and hashing are identity-based.
#[derive(Debug, Clone)]
pub struct LuggageOption {
    pub id: LuggageId,
    pub provider: String,
    pub weight_limit_kg: u32,
    pub price: Price,
}

impl PartialEq for LuggageOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LuggageOption {}

impl Hash for LuggageOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_id() {
        let a = LuggageOption {
            id: LuggageId(1),
            provider: "BagPort".to_string(),
            weight_limit_kg: 23,
            price: Price::new(3000),
        };
        let b = LuggageOption {
            id: LuggageId(1),
            provider: "Other".to_string(),
            weight_limit_kg: 32,
            price: Price::new(4500),
        };

        assert_eq!(a, b);
    }
}
