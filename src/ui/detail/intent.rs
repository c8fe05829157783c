use crate::api::Country;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Navigate to `code`. `cached` is the in-memory hit, if any.
    Open {
        code: String,
        cached: Option<Country>,
    },
    /// Outcome of a by-code fetch for `code`.
    Fetched {
        code: String,
        result: Result<Country, String>,
    },
    Retry,
    Close,
}

impl Intent for DetailIntent {}
