use std::{
    future::{ready, Future},
    pin::Pin,
    task::{Context, Poll},
};

use tower::Service;
use tracing::info;

use super::{DomainLogic, Error};

/// End of a secretary session
///
/// Sessions belong to the web layer, so nothing in the catalog changes.
pub struct LogoutRequest {
    pub club: Option<String>,
}

impl<C, K> Service<LogoutRequest> for DomainLogic<C, K> {
    type Response = ();
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: LogoutRequest) -> Self::Future {
        if let Some(club) = req.club {
            info!(%club, "logged out");
        }
        Box::pin(ready(Ok(())))
    }
}
