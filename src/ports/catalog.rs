use chrono::NaiveDateTime;

use crate::domain::{
    booking::{Receipt, Rejection},
    Club, Competition,
};

#[mockall::automock]
#[async_trait::async_trait]
pub trait CatalogPort {
    async fn find_club_by_email(&self, email: &str) -> Result<Club, Error>;
    async fn find_club_by_name(&self, name: &str) -> Result<Club, Error>;
    async fn find_competition_by_name(&self, name: &str) -> Result<Competition, Error>;
    async fn list_clubs(&self) -> Result<Vec<Club>, Error>;
    async fn list_competitions(&self) -> Result<Vec<Competition>, Error>;
    async fn booked_places(&self, club: &str, competition: &str) -> Result<u32, Error>;

    /// Validate and apply a booking as a single unit
    ///
    /// No other purchase can observe or modify the club, the competition or the ledger between
    /// the checks and the updates.
    async fn purchase_places(
        &self,
        club: &str,
        competition: &str,
        requested: i64,
        now: NaiveDateTime,
    ) -> Result<Purchase, Error>;
}

/// State of the records right after a successful booking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub club: Club,
    pub competition: Competition,
    pub receipt: Receipt,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No club matches the given name or email
    #[error("club {0} does not exist")]
    ClubNotFound(String),

    /// No competition matches the given name
    #[error("competition {0} does not exist")]
    CompetitionNotFound(String),

    /// The booking was refused by the booking rules
    ///
    /// Nothing was modified.
    #[error("booking rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as storage or configuration errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
