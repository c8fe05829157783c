use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::api::model::{Country, COUNTRY_FIELDS};
use crate::api::{ApiResult, CountryService};
use crate::config::ApiConfig;

/// Client for the public REST country-data service.
///
/// Issues exactly one request per call. Nothing is retried or cached.
#[derive(Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl RestCountriesClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|_| ApiError::InvalidUrl {
            url: config.base_url.clone(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(concat!("countries-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// `{base}/{segments...}?fields=...`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        url.set_query(Some(&format!("fields={}", COUNTRY_FIELDS)));
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> ApiResult<Value> {
        tracing::debug!(url = %url, "GET");

        let result = timeout(self.request_timeout, async {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| ApiError::Transport { source })?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::from_status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|source| ApiError::Transport { source })?;
            serde_json::from_slice::<Value>(&body).map_err(|e| ApiError::Payload(e.to_string()))
        })
        .await;

        let result = match result {
            Ok(inner) => inner,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        if let Err(err) = &result {
            tracing::warn!(url = %url, error = %err, "country request failed");
        }
        result
    }
}

impl CountryService for RestCountriesClient {
    async fn fetch_all(&self) -> ApiResult<Vec<Country>> {
        let url = self.endpoint(&["all"])?;
        let body = self.get_json(url).await?;
        countries_from_array(&body)
    }

    async fn fetch_by_name(&self, name: &str) -> ApiResult<Vec<Country>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::NotFound);
        }
        let url = self.endpoint(&["name", name])?;
        let body = self.get_json(url).await?;
        countries_from_array(&body)
    }

    async fn fetch_by_code(&self, code: &str) -> ApiResult<Vec<Country>> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ApiError::NotFound);
        }
        let url = self.endpoint(&["alpha", code])?;
        let body = self.get_json(url).await?;
        single_country(&body).map(|country| vec![country])
    }
}

fn countries_from_array(body: &Value) -> ApiResult<Vec<Country>> {
    match body {
        Value::Array(items) => Ok(items.iter().map(Country::from_value).collect()),
        _ => Err(ApiError::Payload("expected a JSON array".to_string())),
    }
}

// `/alpha/{code}` answers with an object, but older API versions wrap it in
// a one-element array.
fn single_country(body: &Value) -> ApiResult<Country> {
    match body {
        Value::Object(_) => Ok(Country::from_value(body)),
        Value::Array(items) => items
            .first()
            .map(Country::from_value)
            .ok_or(ApiError::NotFound),
        _ => Err(ApiError::Payload("expected a JSON object".to_string())),
    }
}
