use crate::api::Country;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Begin a fetch of the full collection. Ignored while one is in flight.
    /// `refresh` keeps the current rows visible during the fetch.
    FetchStarted { refresh: bool },
    /// Results carry the generation of the request that produced them;
    /// anything older than the current request is dropped.
    FetchSucceeded {
        generation: u64,
        countries: Vec<Country>,
    },
    FetchFailed { generation: u64, message: String },
    /// Settled (debounced) search text.
    QueryChanged(String),
    LoadMore,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
}

impl Intent for ListIntent {}
