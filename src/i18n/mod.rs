//! Localized UI strings.
//!
//! Two static dictionaries keyed by dot-separated paths. Lookups never fail:
//! a missing path resolves to the key itself so untranslated text stays
//! visible instead of blank.

mod context;
mod en;
mod es;

pub use context::{device_locale, LocaleContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Es]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Accepts `es`, `ES`, `es-MX`, `es_ES.UTF-8`. Unknown languages yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        let language = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => en::ENTRIES,
            Locale::Es => es::ENTRIES,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Looks `key` up in the dictionary for `locale`, falling back to `key`.
pub fn resolve<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .entries()
        .iter()
        .find(|(path, _)| *path == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

/// Replaces `{name}` placeholders. Unknown placeholders are left as-is.
///
/// Single pass over the template; substituted values are never rescanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            break;
        };
        let name = &tail[1..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}
