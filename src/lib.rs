pub mod api;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod i18n;
pub mod logging;
pub mod pagination;
pub mod ui;
