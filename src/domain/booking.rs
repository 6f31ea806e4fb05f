use chrono::NaiveDateTime;

use super::{ledger::BookingLedger, Club, Competition, COST_PER_PLACE, MAX_PLACES_PER_CLUB};

/// Reason for refusing a booking
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Zero or negative number of places requested
    #[error("places must be a positive integer")]
    InvalidPlaceCount { requested: i64 },

    /// The club cannot pay for the requested places
    #[error("you don't have enough points available")]
    InsufficientPoints { available: u32, requested: u32 },

    /// The competition does not have that many places left
    #[error("you can't book more places than available")]
    InsufficientCapacity { remaining: u32, requested: u32 },

    /// The club would hold more than [`MAX_PLACES_PER_CLUB`] places for the competition
    #[error("you can't book more than {} places per competition", MAX_PLACES_PER_CLUB)]
    PerClubCapExceeded { already_booked: u32, requested: u32 },

    /// The competition already started
    #[error("bookings for a past competition are closed")]
    EventInPast,
}

/// A booking that passed every check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidBooking {
    pub places: u32,
    pub cost: u32,
}

/// Outcome of an applied booking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub places: u32,
    pub points_spent: u32,
    /// Places the club now holds for the competition, this booking included
    pub already_booked: u32,
}

/// Check whether `club` may book `requested` places for `competition`
///
/// Checks run in a fixed order and the first failure wins: place count, points, capacity, per-club
/// cap, then date.
pub fn validate(
    club: &Club,
    competition: &Competition,
    already_booked: u32,
    requested: i64,
    now: NaiveDateTime,
) -> Result<ValidBooking, Rejection> {
    if requested < 1 {
        return Err(Rejection::InvalidPlaceCount { requested });
    }
    // Anything that does not fit in a u32 cannot be paid for
    let places = u32::try_from(requested).unwrap_or(u32::MAX);

    let cost = match places.checked_mul(COST_PER_PLACE) {
        Some(cost) if cost <= club.points => cost,
        _ => {
            return Err(Rejection::InsufficientPoints {
                available: club.points,
                requested: places,
            })
        }
    };

    if competition.remaining_places < places {
        return Err(Rejection::InsufficientCapacity {
            remaining: competition.remaining_places,
            requested: places,
        });
    }

    if already_booked.saturating_add(places) > MAX_PLACES_PER_CLUB {
        return Err(Rejection::PerClubCapExceeded {
            already_booked,
            requested: places,
        });
    }

    if competition.is_past(now) {
        return Err(Rejection::EventInPast);
    }

    Ok(ValidBooking { places, cost })
}

/// Validate a booking and apply it to the club, the competition and the ledger
///
/// On rejection nothing is modified.
pub fn purchase(
    club: &mut Club,
    competition: &mut Competition,
    ledger: &mut BookingLedger,
    requested: i64,
    now: NaiveDateTime,
) -> Result<Receipt, Rejection> {
    let already_booked = ledger.get(&club.name, &competition.name);
    let ValidBooking { places, cost } =
        validate(club, competition, already_booked, requested, now)?;

    club.points -= cost;
    competition.remaining_places -= places;
    ledger.add(&club.name, &competition.name, places);

    Ok(Receipt {
        places,
        points_spent: cost,
        already_booked: already_booked + places,
    })
}

/// Maximum number of places the club could book right now
///
/// Only used for display: capacity and dates are enforced by [`validate`].
pub fn max_places(club: &Club, already_booked: u32) -> u32 {
    (club.points / COST_PER_PLACE).min(MAX_PLACES_PER_CLUB.saturating_sub(already_booked))
}
