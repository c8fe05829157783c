//! Country-data access.
//!
//! Screens depend on the [`CountryService`] capability rather than on a
//! concrete client, so the REST client and the offline data set are
//! interchangeable.

pub mod client;
pub mod error;
pub mod mock;
pub mod model;

use std::future::Future;

pub use client::RestCountriesClient;
pub use error::ApiError;
pub use mock::MockCountryService;
pub use model::{Country, CountryName, Flags};

/// Uniform success/failure result of one API call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Read-only access to the three country endpoints.
pub trait CountryService: Send + Sync + 'static {
    fn fetch_all(&self) -> impl Future<Output = ApiResult<Vec<Country>>> + Send;

    /// Substring match performed by the service.
    fn fetch_by_name(&self, name: &str) -> impl Future<Output = ApiResult<Vec<Country>>> + Send;

    /// Exact cca3 lookup. Yields a single-element list on success.
    fn fetch_by_code(&self, code: &str) -> impl Future<Output = ApiResult<Vec<Country>>> + Send;
}

/// Service selected at startup: network or offline.
#[derive(Clone)]
pub enum CountrySource {
    Rest(RestCountriesClient),
    Mock(MockCountryService),
}

impl CountryService for CountrySource {
    async fn fetch_all(&self) -> ApiResult<Vec<Country>> {
        match self {
            CountrySource::Rest(client) => client.fetch_all().await,
            CountrySource::Mock(mock) => mock.fetch_all().await,
        }
    }

    async fn fetch_by_name(&self, name: &str) -> ApiResult<Vec<Country>> {
        match self {
            CountrySource::Rest(client) => client.fetch_by_name(name).await,
            CountrySource::Mock(mock) => mock.fetch_by_name(name).await,
        }
    }

    async fn fetch_by_code(&self, code: &str) -> ApiResult<Vec<Country>> {
        match self {
            CountrySource::Rest(client) => client.fetch_by_code(code).await,
            CountrySource::Mock(mock) => mock.fetch_by_code(code).await,
        }
    }
}
