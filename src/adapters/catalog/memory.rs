use crate::{
    domain::{booking, catalog::Catalog, ledger::BookingLedger, Club, Competition},
    ports::catalog::{CatalogPort, Error, Purchase},
};
use chrono::NaiveDateTime;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Process-wide catalog and ledger, kept in memory
///
/// Clones share the same underlying store. Nothing is written back anywhere: the state lives as
/// long as the last clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    catalog: Catalog,
    ledger: BookingLedger,
}

impl MemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                catalog,
                ledger: BookingLedger::default(),
            })),
        }
    }
}

#[async_trait::async_trait]
impl CatalogPort for MemoryCatalog {
    async fn find_club_by_email(&self, email: &str) -> Result<Club, Error> {
        self.state
            .lock()?
            .catalog
            .find_club_by_email(email)
            .cloned()
            .ok_or_else(|| Error::ClubNotFound(email.to_string()))
    }

    async fn find_club_by_name(&self, name: &str) -> Result<Club, Error> {
        self.state
            .lock()?
            .catalog
            .find_club_by_name(name)
            .cloned()
            .ok_or_else(|| Error::ClubNotFound(name.to_string()))
    }

    async fn find_competition_by_name(&self, name: &str) -> Result<Competition, Error> {
        self.state
            .lock()?
            .catalog
            .find_competition_by_name(name)
            .cloned()
            .ok_or_else(|| Error::CompetitionNotFound(name.to_string()))
    }

    async fn list_clubs(&self) -> Result<Vec<Club>, Error> {
        Ok(self.state.lock()?.catalog.clubs().to_vec())
    }

    async fn list_competitions(&self) -> Result<Vec<Competition>, Error> {
        Ok(self.state.lock()?.catalog.competitions().to_vec())
    }

    async fn booked_places(&self, club: &str, competition: &str) -> Result<u32, Error> {
        Ok(self.state.lock()?.ledger.get(club, competition))
    }

    async fn purchase_places(
        &self,
        club: &str,
        competition: &str,
        requested: i64,
        now: NaiveDateTime,
    ) -> Result<Purchase, Error> {
        // The lock is held from the first read to the last write
        let mut guard = self.state.lock()?;
        let State { catalog, ledger } = &mut *guard;

        let (found_club, found_competition) = catalog.club_and_competition_mut(club, competition);
        let found_club = found_club.ok_or_else(|| Error::ClubNotFound(club.to_string()))?;
        let found_competition =
            found_competition.ok_or_else(|| Error::CompetitionNotFound(competition.to_string()))?;

        let receipt = booking::purchase(found_club, found_competition, ledger, requested, now)?;
        debug!(
            club,
            competition,
            points = found_club.points,
            remaining_places = found_competition.remaining_places,
            "booking applied"
        );

        Ok(Purchase {
            club: found_club.clone(),
            competition: found_competition.clone(),
            receipt,
        })
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
