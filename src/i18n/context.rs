use tokio::sync::watch;

use crate::config::LocaleStore;
use crate::i18n::{interpolate, resolve, Locale};

/// Owner of the selected UI language.
///
/// Rendering code receives a `&LocaleContext` instead of reading global
/// state. Only this type writes the persisted choice and announces changes.
pub struct LocaleContext {
    locale: Locale,
    store: Option<LocaleStore>,
    changes: watch::Sender<Locale>,
}

impl LocaleContext {
    pub fn new(locale: Locale, store: Option<LocaleStore>) -> Self {
        let (changes, _) = watch::channel(locale);
        Self {
            locale,
            store,
            changes,
        }
    }

    /// Picks the startup language.
    ///
    /// Order: explicit flag, config value, stored choice, device locale,
    /// English. Unsupported tags at any step are skipped.
    pub fn resolve_initial(
        flag: Option<&str>,
        configured: Option<&str>,
        store: Option<&LocaleStore>,
        device: Option<&str>,
    ) -> Locale {
        let stored = store.and_then(|store| match store.read() {
            Ok(tag) => tag,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored locale");
                None
            }
        });

        let locale = [flag, configured, stored.as_deref(), device]
            .into_iter()
            .flatten()
            .find_map(Locale::parse)
            .unwrap_or_default();
        locale
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        resolve(self.locale, key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(resolve(self.locale, key), args)
    }

    /// Selects the language for `tag`. Unsupported tags are a no-op.
    pub fn set_locale_tag(&mut self, tag: &str) -> bool {
        match Locale::parse(tag) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                tracing::debug!(tag, "ignoring unsupported locale");
                false
            }
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        self.locale = locale;
        tracing::info!(locale = %locale, "locale changed");

        if let Some(store) = &self.store {
            if let Err(err) = store.write(locale.tag()) {
                tracing::warn!(error = %err, "could not persist locale");
            }
        }
        self.changes.send_replace(locale);
    }

    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.locale.toggle());
        self.locale
    }

    /// Receiver that observes every later language change.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.changes.subscribe()
    }
}

/// Language of the environment, from `LC_ALL`, `LC_MESSAGES` or `LANG`.
pub fn device_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
