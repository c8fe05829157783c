//! Offline data set for development without network access.

use crate::api::error::ApiError;
use crate::api::model::{Country, CountryName, Flags};
use crate::api::{ApiResult, CountryService};

/// In-memory stand-in for the REST service with the same lookup semantics.
#[derive(Debug, Clone)]
pub struct MockCountryService {
    countries: Vec<Country>,
}

impl Default for MockCountryService {
    fn default() -> Self {
        Self::new(mock_countries())
    }
}

impl MockCountryService {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl CountryService for MockCountryService {
    async fn fetch_all(&self) -> ApiResult<Vec<Country>> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_name(&self, name: &str) -> ApiResult<Vec<Country>> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ApiError::NotFound);
        }
        let matches: Vec<Country> = self
            .countries
            .iter()
            .filter(|c| {
                c.name.common.to_lowercase().contains(&needle)
                    || c.name.official.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        if matches.is_empty() {
            Err(ApiError::NotFound)
        } else {
            Ok(matches)
        }
    }

    async fn fetch_by_code(&self, code: &str) -> ApiResult<Vec<Country>> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| !code.is_empty() && c.cca3.eq_ignore_ascii_case(code))
            .cloned()
            .map(|c| vec![c])
            .ok_or(ApiError::NotFound)
    }
}

fn entry(
    common: &str,
    official: &str,
    iso2: &str,
    capital: &str,
    population: u64,
    region: &str,
    cca3: &str,
) -> Country {
    Country {
        name: CountryName {
            common: common.to_string(),
            official: official.to_string(),
        },
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{iso2}.png"),
            svg: format!("https://flagcdn.com/{iso2}.svg"),
        },
        capital: vec![capital.to_string()],
        population,
        region: region.to_string(),
        cca3: cca3.to_string(),
    }
}

pub fn mock_countries() -> Vec<Country> {
    vec![
        entry("Spain", "Kingdom of Spain", "es", "Madrid", 47_394_837, "Europe", "ESP"),
        entry("France", "French Republic", "fr", "Paris", 65_273_511, "Europe", "FRA"),
        entry(
            "Germany",
            "Federal Republic of Germany",
            "de",
            "Berlin",
            83_783_942,
            "Europe",
            "DEU",
        ),
        entry(
            "United States",
            "United States of America",
            "us",
            "Washington, D.C.",
            329_484_123,
            "Americas",
            "USA",
        ),
        entry("Japan", "Japan", "jp", "Tokyo", 125_836_021, "Asia", "JPN"),
        entry(
            "Brazil",
            "Federative Republic of Brazil",
            "br",
            "Brasília",
            212_559_417,
            "Americas",
            "BRA",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_by_code_ignores_case() {
        let service = MockCountryService::default();
        let found = service.fetch_by_code("jpn").await.unwrap();
        assert_eq!(found[0].name.common, "Japan");
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let service = MockCountryService::default();
        let err = service.fetch_by_code("XYZ").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn name_search_is_substring() {
        let service = MockCountryService::default();
        let found = service.fetch_by_name("republic").await.unwrap();
        let codes: Vec<_> = found.iter().map(|c| c.cca3.as_str()).collect();
        assert_eq!(codes, vec!["FRA", "DEU", "BRA"]);
    }

    #[test]
    fn codes_are_unique() {
        let countries = mock_countries();
        let mut codes: Vec<_> = countries.iter().map(|c| c.cca3.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), countries.len());
    }
}
