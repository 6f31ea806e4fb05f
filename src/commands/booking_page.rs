use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{booking::max_places, Club, Competition},
    ports::{catalog::CatalogPort, clock::ClockPort},
};
use tower::Service;
use tracing::{debug, warn};

use super::{DomainLogic, Error};

pub struct BookingPageRequest {
    pub club: String,
    pub competition: String,
}

/// Data shown on the booking form of a competition
#[derive(Debug, PartialEq, Eq)]
pub struct BookingPageResponse {
    pub club: Club,
    pub competition: Competition,
    /// Places the club already holds for this competition
    pub already_booked: u32,
    /// Upper bound offered on the booking form
    pub max_places: u32,
}

impl<C, K> Service<BookingPageRequest> for DomainLogic<C, K>
where
    C: CatalogPort + 'static,
    K: ClockPort + 'static,
{
    type Response = BookingPageResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: BookingPageRequest) -> Self::Future {
        let catalog = self.catalog.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            let club = catalog.find_club_by_name(&req.club).await?;
            let competition = catalog.find_competition_by_name(&req.competition).await?;

            if competition.is_past(clock.now()) {
                warn!(competition = %competition.name, "booking page of a past competition");
                return Err(Error::CompetitionInPast(competition.name));
            }

            let already_booked = catalog
                .booked_places(&club.name, &competition.name)
                .await?;
            let max_places = max_places(&club, already_booked);
            debug!(
                club = %club.name,
                competition = %competition.name,
                already_booked,
                max_places,
                "booking page"
            );

            Ok(BookingPageResponse {
                club,
                competition,
                already_booked,
                max_places,
            })
        })
    }
}
