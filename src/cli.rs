//! Command-line surface: argument parsing and the one-shot subcommands.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::api::model::{format_population, format_population_grouped, sort_by_name};
use crate::api::{ApiResult, Country, CountryService};
use crate::config::BASE_URL_ENV;
use crate::i18n::LocaleContext;
use crate::pagination::paginate;
use crate::ui::components::CountryCard;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Browse the countries of the world from the terminal"
)]
pub struct Cli {
    /// Override the country API base URL
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Interface language (en, es)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Use the built-in offline data set instead of the network
    #[arg(long, global = true)]
    pub mock: bool,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print one page of the collection, sorted by name
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page (defaults to ui.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Search countries by name
    Search { name: String },
    /// Show one country by its three-letter code
    Show { code: String },
}

/// Runs a one-shot subcommand and returns the text to print.
pub async fn execute<S: CountryService>(
    service: &S,
    command: &Command,
    default_page_size: usize,
    locale: &LocaleContext,
) -> ApiResult<String> {
    match command {
        Command::List { page, page_size } => {
            let mut countries = service.fetch_all().await?;
            sort_by_name(&mut countries);
            Ok(format_page(
                &countries,
                *page,
                page_size.unwrap_or(default_page_size),
                locale,
            ))
        }
        Command::Search { name } => {
            let mut countries = match service.fetch_by_name(name).await {
                Ok(countries) => countries,
                Err(err) if err.is_not_found() => Vec::new(),
                Err(err) => return Err(err),
            };
            sort_by_name(&mut countries);
            Ok(format_search(name, &countries, locale))
        }
        Command::Show { code } => {
            let countries = service.fetch_by_code(code).await?;
            let country = countries
                .first()
                .ok_or(crate::api::ApiError::NotFound)?;
            Ok(format_detail(country, locale))
        }
    }
}

pub fn format_page(
    countries: &[Country],
    page: usize,
    page_size: usize,
    locale: &LocaleContext,
) -> String {
    let result = paginate(countries, page, page_size);
    let mut out = format_rows(&result.data, locale);
    let _ = writeln!(
        out,
        "{}",
        locale.t_with(
            "cli.page",
            &[
                ("page", &result.pagination.current_page.to_string()),
                ("pages", &result.pagination.total_pages.to_string()),
                ("total", &result.pagination.total_items.to_string()),
            ],
        )
    );
    out
}

pub fn format_search(query: &str, countries: &[Country], locale: &LocaleContext) -> String {
    let count = countries.len().to_string();
    let key = match countries.len() {
        0 => "search.noResults",
        1 => "search.oneResult",
        _ => "search.results",
    };
    let mut out = format_rows(countries, locale);
    let _ = writeln!(
        out,
        "{}",
        locale.t_with(key, &[("query", query), ("count", &count)])
    );
    out
}

fn format_rows(countries: &[Country], locale: &LocaleContext) -> String {
    let mut out = String::new();
    for country in countries {
        let _ = writeln!(
            out,
            "{:<4} {:<28} {}",
            country.cca3,
            country.name.common,
            CountryCard::new(country).summary(locale)
        );
    }
    out
}

pub fn format_detail(country: &Country, locale: &LocaleContext) -> String {
    let not_available = locale.t("country.notAvailable");
    let or_na = |value: &str| -> String {
        if value.is_empty() {
            not_available.to_string()
        } else {
            value.to_string()
        }
    };
    let flag = if country.flags.svg.is_empty() {
        &country.flags.png
    } else {
        &country.flags.svg
    };

    let rows = [
        ("country.officialName", or_na(country.name.official.as_str())),
        ("country.capital", or_na(country.capital.join(", ").as_str())),
        ("country.region", or_na(country.region.as_str())),
        (
            "country.population",
            format!(
                "{} ({})",
                format_population_grouped(country.population),
                format_population(country.population)
            ),
        ),
        ("country.code", or_na(country.cca3.as_str())),
        ("country.flag", or_na(flag.as_str())),
    ];

    let mut out = format!("{}\n", country.name.common);
    for (key, value) in rows {
        let _ = writeln!(out, "  {:<16}{}", locale.t(key), value);
    }
    out
}
