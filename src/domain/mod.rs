use chrono::NaiveDateTime;

pub mod booking;
pub mod catalog;
pub mod ledger;

/// Number of points a club spends for a single place
pub const COST_PER_PLACE: u32 = 3;

/// Maximum number of places a single club can hold for one competition
pub const MAX_PLACES_PER_CLUB: u32 = 12;

/// A member club of the federation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Club {
    /// Unique name of the club
    pub name: String,
    /// Contact email of the club secretary
    ///
    /// This is also the login credential, so it is unique across clubs.
    pub email: String,
    /// Current balance of points available for bookings
    pub points: u32,
}

impl Club {
    pub fn new(name: impl Into<String>, email: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            points,
        }
    }
}

/// A scheduled competition with a finite number of places
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Competition {
    /// Unique name of the competition
    pub name: String,
    /// Scheduled start, in local wall-clock time
    pub date: NaiveDateTime,
    /// Number of places that can still be booked
    pub remaining_places: u32,
}

impl Competition {
    pub fn new(name: impl Into<String>, date: NaiveDateTime, remaining_places: u32) -> Self {
        Self {
            name: name.into(),
            date,
            remaining_places,
        }
    }

    /// Whether the competition already started at `now`
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.date <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::*;
    use speculoos::prelude::*;

    #[rstest]
    #[case(Duration::hours(-1), true)]
    #[case(Duration::zero(), true)]
    #[case(Duration::seconds(1), false)]
    fn test_is_past(#[case] offset: Duration, #[case] expected: bool) {
        let now = chrono::Local::now().naive_local();
        let competition = Competition::new("Spring Festival", now + offset, 25);

        assert_that!(competition.is_past(now)).is_equal_to(expected);
    }
}
