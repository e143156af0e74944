//! Monetary types.

use std::fmt;

use super::DomainError;

/// A non-negative amount of money in the smallest currency unit.
///
/// Prices are stored in minor units (e.g. cents), so arithmetic on them is
/// exact. Non-negativity is guaranteed by the representation.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Price;
///
/// let fare = Price::new(12_50);
/// assert_eq!(fare.minor_units(), 1250);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    /// A price of zero.
    pub const ZERO: Price = Price(0);

    /// The largest representable price.
    pub const MAX: Price = Price(u32::MAX);

    /// Creates a price from an amount in minor units.
    pub const fn new(minor_units: u32) -> Self {
        Price(minor_units)
    }

    /// Returns the amount in minor units.
    pub const fn minor_units(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive price interval used to bound searches.
///
/// # Invariants
///
/// - `min <= max`, enforced at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Creates a price range.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `min > max`.
    pub fn new(min: Price, max: Price) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidPriceRange { min, max });
        }
        Ok(PriceRange { min, max })
    }

    /// The range covering every representable price.
    pub const fn unbounded() -> Self {
        PriceRange {
            min: Price::ZERO,
            max: Price::MAX,
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> Price {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> Price {
        self.max
    }

    /// Returns true if `price` falls within the range.
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ordering the endpoints always yields a valid range
        #[test]
        fn ordered_endpoints_always_valid(a in any::<u32>(), b in any::<u32>()) {
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assert!(PriceRange::new(Price::new(lo), Price::new(hi)).is_ok());
        }

        /// A range contains exactly the prices between its endpoints
        #[test]
        fn contains_matches_bounds(lo in any::<u32>(), hi in any::<u32>(), p in any::<u32>()) {
            let (lo, hi) = (lo.min(hi), lo.max(hi));
            let range = PriceRange::new(Price::new(lo), Price::new(hi)).unwrap();
            prop_assert_eq!(range.contains(Price::new(p)), lo <= p && p <= hi);
        }

        /// The unbounded range rejects nothing
        #[test]
        fn unbounded_rejects_nothing(p in any::<u32>()) {
            prop_assert!(PriceRange::unbounded().contains(Price::new(p)));
        }
    }
}
