pub const ENTRIES: &[(&str, &str)] = &[
    ("app.title", "Countries Explorer"),
    ("app.subtitle", "Discover {count} countries around the world"),
    ("language.name", "English"),
    ("search.placeholder", "Search countries..."),
    ("search.clearHint", "Esc to clear"),
    ("search.searching", "Searching..."),
    ("search.noResults", "No results found for \"{query}\""),
    ("search.oneResult", "1 result found for \"{query}\""),
    ("search.results", "{count} results found for \"{query}\""),
    ("list.loading", "Loading countries from around the world..."),
    ("list.refreshing", "Refreshing..."),
    ("list.emptyTitle", "No countries found"),
    ("list.emptyMessage", "Try refreshing the list or check your connection"),
    ("loadMore", "Load more"),
    ("loading", "Loading..."),
    ("noResults", "No more results"),
    ("pagination.progress", "{loaded} of {total} loaded"),
    ("pagination.end", "All {total} countries loaded"),
    ("country.officialName", "Official name"),
    ("country.capital", "Capital"),
    ("country.region", "Region"),
    ("country.population", "Population"),
    ("country.code", "Code"),
    ("country.flag", "Flag"),
    ("country.notAvailable", "N/A"),
    ("detail.title", "Country Detail"),
    ("detail.loading", "Loading country {code}..."),
    ("error.title", "Failed to load countries"),
    ("error.detailTitle", "Failed to load country"),
    ("error.retry", "Press r to retry"),
    ("footer.list", "↑↓ Move │ Enter Details │ Tab More │ Ctrl+R Reload │ Ctrl+L Language │ Ctrl+Q Quit"),
    ("footer.detail", "Esc Back │ r Retry │ Ctrl+L Language │ Ctrl+Q Quit"),
    ("cli.page", "Page {page} of {pages} · {total} countries"),
];
