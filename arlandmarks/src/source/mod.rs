//! Data-source collaborator abstraction.
//!
//! The landmark data set lives on a remote backend with its own admin
//! CRUD surface; this core only ever reads it. [`LandmarkSource`] is the
//! seam: the session fetches complete landmark and category collections
//! through it and replaces the store snapshot wholesale. A failed fetch
//! surfaces a [`DataSourceError`] and leaves the previous snapshot
//! untouched; a refresh is all-or-nothing.

mod fixture;
mod http;
mod rest;

pub use fixture::StaticLandmarkSource;
pub use http::{HttpClient, ReqwestClient};
pub use rest::RestLandmarkSource;

#[cfg(test)]
pub use http::tests::MockHttpClient;

use thiserror::Error;

use crate::store::{Category, Landmark};

/// Errors from the data-source collaborator.
///
/// All recoverable: the caller keeps its previous snapshot and reports
/// the error upward once.
#[derive(Debug, Clone, Error)]
pub enum DataSourceError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The request could not be completed (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode {0}")]
    Decode(String),
}

/// Supplies the landmark and category collections.
pub trait LandmarkSource: Send + Sync {
    /// Fetch all landmarks, with categories embedded.
    fn fetch_landmarks(&self) -> Result<Vec<Landmark>, DataSourceError>;

    /// Fetch all categories.
    fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError>;
}
