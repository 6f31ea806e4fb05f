use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Club, Competition},
    ports::{
        catalog::{CatalogPort, Error as CatalogError, Purchase},
        clock::ClockPort,
    },
};
use tower::Service;
use tracing::{info, warn};
use uuid::Uuid;

use super::{DomainLogic, Error};

pub struct PurchasePlacesRequest {
    pub club: String,
    pub competition: String,
    /// Number of places to book
    ///
    /// This is signed as it comes straight from the booking form. Anything below one is rejected.
    pub places: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PurchasePlacesResponse {
    /// Reference of this booking, for display
    pub booking_id: Uuid,
    /// Club after the booking
    pub club: Club,
    /// Competition after the booking
    pub competition: Competition,
    pub places: u32,
    pub points_spent: u32,
    /// Places the club now holds for the competition
    pub already_booked: u32,
}

impl<C, K> Service<PurchasePlacesRequest> for DomainLogic<C, K>
where
    C: CatalogPort + 'static,
    K: ClockPort + 'static,
{
    type Response = PurchasePlacesResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: PurchasePlacesRequest) -> Self::Future {
        let catalog = self.catalog.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            let now = clock.now();
            let Purchase {
                club,
                competition,
                receipt,
            } = match catalog
                .purchase_places(&req.club, &req.competition, req.places, now)
                .await
            {
                Ok(purchase) => purchase,
                Err(CatalogError::Rejected(rejection)) => {
                    warn!(
                        club = %req.club,
                        competition = %req.competition,
                        places = req.places,
                        reason = %rejection,
                        "booking rejected"
                    );
                    return Err(CatalogError::Rejected(rejection).into());
                }
                Err(err) => return Err(err.into()),
            };

            let booking_id = Uuid::new_v4();
            info!(
                %booking_id,
                club = %club.name,
                competition = %competition.name,
                places = receipt.places,
                points_left = club.points,
                "booking complete"
            );

            Ok(PurchasePlacesResponse {
                booking_id,
                club,
                competition,
                places: receipt.places,
                points_spent: receipt.points_spent,
                already_booked: receipt.already_booked,
            })
        })
    }
}
