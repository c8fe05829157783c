//! Country record and its normalization from loosely-typed JSON.
//!
//! The upstream service omits fields freely and occasionally changes their
//! types, so records are read from `serde_json::Value` field by field instead
//! of through a strict derive. Anything missing or mistyped takes a default.

use serde_json::Value;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Field selection sent with every request.
pub const COUNTRY_FIELDS: &str = "name,flags,capital,population,region,cca3";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub png: String,
    pub svg: String,
}

/// A single country as shown by the list and detail screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    pub name: CountryName,
    pub flags: Flags,
    /// Ordered capitals; some territories have none, a few have several.
    pub capital: Vec<String>,
    pub population: u64,
    pub region: String,
    /// ISO 3166-1 alpha-3 code, unique row key.
    pub cca3: String,
}

impl Country {
    /// Build a record from one JSON object, defaulting every absent field.
    pub fn from_value(value: &Value) -> Self {
        let name = value.get("name");
        let flags = value.get("flags");

        Self {
            name: CountryName {
                common: string_at(name, "common"),
                official: string_at(name, "official"),
            },
            flags: Flags {
                png: string_at(flags, "png"),
                svg: string_at(flags, "svg"),
            },
            capital: value
                .get("capital")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            population: value.get("population").map(population_of).unwrap_or(0),
            region: string_at(Some(value), "region"),
            cca3: string_at(Some(value), "cca3"),
        }
    }

    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Case-insensitive substring match over names and capitals.
    ///
    /// An empty (or whitespace-only) query matches every country.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.common.to_lowercase().contains(&needle)
            || self.name.official.to_lowercase().contains(&needle)
            || self
                .capital
                .iter()
                .any(|capital| capital.to_lowercase().contains(&needle))
    }
}

fn string_at(parent: Option<&Value>, key: &str) -> String {
    parent
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn population_of(value: &Value) -> u64 {
    if let Some(n) = value.as_u64() {
        return n;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.round() as u64,
        _ => 0,
    }
}

/// Alphabetical order by common name, ignoring case and accents.
///
/// Ties fall back to the raw name, then cca3.
pub fn compare_by_name(a: &Country, b: &Country) -> Ordering {
    collation_key(&a.name.common)
        .cmp(&collation_key(&b.name.common))
        .then_with(|| a.name.common.cmp(&b.name.common))
        .then_with(|| a.cca3.cmp(&b.cca3))
}

/// Lowercased base letters: NFD with combining marks dropped.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(compare_by_name);
}

/// Short population label: `47.4M`, `850K`, `999`.
pub fn format_population(population: u64) -> String {
    if population >= 1_000_000 {
        format!("{:.1}M", population as f64 / 1_000_000.0)
    } else if population >= 1_000 {
        format!("{:.0}K", population as f64 / 1_000.0)
    } else {
        population.to_string()
    }
}

/// Full population with thousands separators: `47,394,837`.
pub fn format_population_grouped(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
