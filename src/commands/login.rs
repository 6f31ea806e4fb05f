use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Club, Competition},
    ports::{catalog::CatalogPort, clock::ClockPort},
};
use tower::Service;
use tracing::{info, warn};

use super::{DomainLogic, Error};

pub struct LoginRequest {
    pub email: String,
}

/// Everything the secretary sees right after logging in
#[derive(Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub club: Club,
    /// Competitions that can still be booked, in catalog order
    pub upcoming_competitions: Vec<Competition>,
    /// Competitions that already took place, in catalog order
    pub past_competitions: Vec<Competition>,
    /// Points board of every club
    pub clubs: Vec<Club>,
}

impl<C, K> Service<LoginRequest> for DomainLogic<C, K>
where
    C: CatalogPort + 'static,
    K: ClockPort + 'static,
{
    type Response = LoginResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: LoginRequest) -> Self::Future {
        let catalog = self.catalog.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            let club = match catalog.find_club_by_email(&req.email).await {
                Ok(club) => club,
                Err(err) => {
                    warn!(email = %req.email, "login refused");
                    return Err(err.into());
                }
            };

            let now = clock.now();
            let (past_competitions, upcoming_competitions): (Vec<_>, Vec<_>) = catalog
                .list_competitions()
                .await?
                .into_iter()
                .partition(|competition| competition.is_past(now));
            let clubs = catalog.list_clubs().await?;

            info!(club = %club.name, "logged in");
            Ok(LoginResponse {
                club,
                upcoming_competitions,
                past_competitions,
                clubs,
            })
        })
    }
}
