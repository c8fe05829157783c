//! Presentational pieces. Each one renders only what it is given.

mod country_card;
mod error_panel;
mod load_more;
mod search_box;
mod search_stats;
mod spinner;

pub use country_card::CountryCard;
pub use error_panel::ErrorPanel;
pub use load_more::LoadMoreControl;
pub use search_box::SearchBox;
pub use search_stats::SearchStats;
pub use spinner::Spinner;
