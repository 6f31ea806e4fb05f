use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{domain::Club, ports::catalog::CatalogPort};
use tower::Service;

use super::{DomainLogic, Error};

/// Public list of every club and its current balance
pub struct PointsBoardRequest;

impl<C, K> Service<PointsBoardRequest> for DomainLogic<C, K>
where
    C: CatalogPort + 'static,
{
    type Response = Vec<Club>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: PointsBoardRequest) -> Self::Future {
        let catalog = self.catalog.clone();
        Box::pin(async move { Ok(catalog.list_clubs().await?) })
    }
}
