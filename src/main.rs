use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use countries_explorer::api::{CountrySource, MockCountryService, RestCountriesClient};
use countries_explorer::cli::{execute, Cli};
use countries_explorer::config::{Config, ConfigStore, LocaleStore};
use countries_explorer::i18n::{device_locale, LocaleContext};
use countries_explorer::logging::{init_tracing, LogTarget};
use countries_explorer::ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(if cli.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::default_file()
    });

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?.with_base_url(cli.base_url.clone())?;
    let store = ConfigStore::new(config, config_path);
    let config = store.get();
    tracing::info!(
        config = %store.path().display(),
        base_url = %config.api.base_url,
        mock = cli.mock,
        "starting"
    );

    let service = if cli.mock {
        CountrySource::Mock(MockCountryService::default())
    } else {
        CountrySource::Rest(RestCountriesClient::new(&config.api)?)
    };

    let locale_store = LocaleStore::new(LocaleStore::default_path());
    let initial = LocaleContext::resolve_initial(
        cli.locale.as_deref(),
        config.ui.locale.as_deref(),
        Some(&locale_store),
        device_locale().as_deref(),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match &cli.command {
        Some(command) => {
            // One-shot commands never persist a language choice.
            let locale = LocaleContext::new(initial, None);
            let output = runtime.block_on(execute(
                &service,
                command,
                config.ui.page_size,
                &locale,
            ))?;
            print!("{output}");
        }
        None => {
            let locale = LocaleContext::new(initial, Some(locale_store));
            ui::run(runtime.handle(), Arc::new(service), &config.ui, locale)
                .context("terminal UI failed")?;
        }
    }
    Ok(())
}
