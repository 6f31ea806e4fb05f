use std::sync::Arc;

pub mod booking_page;
pub mod login;
pub mod logout;
pub mod points_board;
pub mod purchase_places;

/// Entry point for the booking portal operations
///
/// Each operation is exposed as a [`tower::Service`] for its own request type.
pub struct DomainLogic<C, K> {
    catalog: Arc<C>,
    clock: Arc<K>,
}

impl<C, K> DomainLogic<C, K> {
    pub fn new(catalog: Arc<C>, clock: Arc<K>) -> Self {
        Self { catalog, clock }
    }
}

impl<C, K> Clone for DomainLogic<C, K> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            clock: self.clock.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("catalog port error: {0}")]
    Catalog(#[from] crate::ports::catalog::Error),

    #[error("competition {0} is already over")]
    CompetitionInPast(String),
}

/// How a caller should treat an [`Error`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// A club or competition does not exist
    NotFound,
    /// The request was understood but refused
    Rejected,
    /// Something failed outside of the business rules
    Internal,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        use crate::ports::catalog::Error as CatalogError;

        match self {
            Error::Catalog(CatalogError::ClubNotFound(_))
            | Error::Catalog(CatalogError::CompetitionNotFound(_)) => ErrorClass::NotFound,
            Error::Catalog(CatalogError::Rejected(_)) | Error::CompetitionInPast(_) => {
                ErrorClass::Rejected
            }
            Error::Catalog(CatalogError::Adapter(_)) => ErrorClass::Internal,
        }
    }
}
