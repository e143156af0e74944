//! Activity option types.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveTime;

use super::Price;

/// Identifier for an activity option, unique within the activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(pub u32);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable activity at the destination.
///
/// Opening hours are stored as parsed times; an activity is assumed to run
/// daily between `open` and `close`. Equality and hashing are identity-based:
/// same `id` means the same catalog entry.
#[derive(Debug, Clone)]
pub struct ActivityOption {
    pub id: ActivityId,
    pub name: String,
    /// Free-form category label from the catalog, e.g. "museum".
    pub category: String,
    pub location: String,
    pub open: NaiveTime,
    pub close: NaiveTime,
    /// How long a visit typically takes.
    pub typical_duration_minutes: u32,
    pub price: Price,
}

impl PartialEq for ActivityOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActivityOption {}

impl Hash for ActivityOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: u32) -> ActivityOption {
        ActivityOption {
            id: ActivityId(id),
            name: "Galleria Borghese".to_string(),
            category: "museum".to_string(),
            location: "Rome".to_string(),
            open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            typical_duration_minutes: 120,
            price: Price::new(1500),
        }
    }

    #[test]
    fn equality_by_id() {
        let a = activity(11);
        let mut b = activity(11);
        b.name = "Something else".to_string();
        b.price = Price::new(9999);

        assert_eq!(a, b);
        assert_ne!(a, activity(12));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(activity(11));
        assert!(set.contains(&activity(11)));
        assert!(!set.contains(&activity(12)));
    }
}
