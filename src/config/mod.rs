pub mod loader;
pub mod locale_store;
pub mod store;
pub mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use locale_store::LocaleStore;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
