//! Search query types.
//!
//! A `TripQuery` is the top-level request a caller issues; it derives the
//! per-category queries the search provider understands. All query types
//! enforce their invariants at construction time, so a provider receiving one
//! can trust its bounds.

use chrono::NaiveDate;

use super::{DomainError, PriceRange};

fn require_place(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyPlace);
    }
    Ok(())
}

fn require_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Search parameters for transport legs.
///
/// # Invariants
///
/// - `origin` and `destination` are non-empty
/// - `passengers >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportQuery {
    origin: String,
    destination: String,
    depart: NaiveDate,
    passengers: u32,
    price: PriceRange,
    max_results: usize,
}

impl TransportQuery {
    /// Creates a transport query.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either place is blank or `passengers` is zero.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart: NaiveDate,
        passengers: u32,
        price: PriceRange,
        max_results: usize,
    ) -> Result<Self, DomainError> {
        let origin = origin.into();
        let destination = destination.into();
        require_place(&origin)?;
        require_place(&destination)?;
        if passengers == 0 {
            return Err(DomainError::NoPassengers);
        }

        Ok(TransportQuery {
            origin,
            destination,
            depart,
            passengers,
            price,
            max_results,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn depart(&self) -> NaiveDate {
        self.depart
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }

    /// How many candidates the provider should return at most.
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

/// Search parameters for lodging.
///
/// # Invariants
///
/// - `location` is non-empty
/// - `check_in <= check_out`
/// - `guests >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StayQuery {
    location: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    price: PriceRange,
}

impl StayQuery {
    /// Creates a stay query.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the location is blank, the dates are inverted, or
    /// `guests` is zero.
    pub fn new(
        location: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        price: PriceRange,
    ) -> Result<Self, DomainError> {
        let location = location.into();
        require_place(&location)?;
        require_ordered(check_in, check_out)?;
        if guests == 0 {
            return Err(DomainError::NoPassengers);
        }

        Ok(StayQuery {
            location,
            check_in,
            check_out,
            guests,
            price,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }
}

/// Search parameters for activities.
///
/// # Invariants
///
/// - `location` is non-empty
/// - `from_date <= to_date`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityQuery {
    location: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
    category: Option<String>,
    price: PriceRange,
}

impl ActivityQuery {
    /// Creates an activity query.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the location is blank or the dates are inverted.
    pub fn new(
        location: impl Into<String>,
        from_date: NaiveDate,
        to_date: NaiveDate,
        category: Option<String>,
        price: PriceRange,
    ) -> Result<Self, DomainError> {
        let location = location.into();
        require_place(&location)?;
        require_ordered(from_date, to_date)?;

        Ok(ActivityQuery {
            location,
            from_date,
            to_date,
            category,
            price,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to_date
    }

    /// Optional category filter; `None` means all categories.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }
}

/// The top-level request to plan an end-to-end trip.
///
/// # Invariants
///
/// - `origin` and `destination` are non-empty
/// - `depart <= return_date`
/// - `passengers >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripQuery {
    origin: String,
    destination: String,
    depart: NaiveDate,
    return_date: NaiveDate,
    passengers: u32,
}

impl TripQuery {
    /// Creates a trip query.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either place is blank, the dates are inverted, or
    /// `passengers` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use trip_server::domain::TripQuery;
    ///
    /// let depart = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let ret = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
    /// let query = TripQuery::new("Lisbon", "Rome", depart, ret, 2).unwrap();
    ///
    /// assert_eq!(query.destination(), "Rome");
    /// ```
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart: NaiveDate,
        return_date: NaiveDate,
        passengers: u32,
    ) -> Result<Self, DomainError> {
        let origin = origin.into();
        let destination = destination.into();
        require_place(&origin)?;
        require_place(&destination)?;
        require_ordered(depart, return_date)?;
        if passengers == 0 {
            return Err(DomainError::NoPassengers);
        }

        Ok(TripQuery {
            origin,
            destination,
            depart,
            return_date,
            passengers,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn depart(&self) -> NaiveDate {
        self.depart
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    /// Derives the transport search for this trip.
    ///
    /// Price bounds are left unbounded; the planner trusts the provider's
    /// ordering and only caps the number of candidates.
    pub fn transport_query(&self, max_results: usize) -> TransportQuery {
        TransportQuery {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            depart: self.depart,
            passengers: self.passengers,
            price: PriceRange::unbounded(),
            max_results,
        }
    }

    /// Derives the lodging search covering the whole trip.
    pub fn stay_query(&self) -> StayQuery {
        StayQuery {
            location: self.destination.clone(),
            check_in: self.depart,
            check_out: self.return_date,
            guests: self.passengers,
            price: PriceRange::unbounded(),
        }
    }

    /// Derives the activity search at the destination, all categories.
    pub fn activity_query(&self) -> ActivityQuery {
        ActivityQuery {
            location: self.destination.clone(),
            from_date: self.depart,
            to_date: self.return_date,
            category: None,
            price: PriceRange::unbounded(),
        }
    }
}
