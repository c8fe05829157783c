//! Language choice survives restarts through the state file.

use countries_explorer::config::LocaleStore;
use countries_explorer::i18n::{Locale, LocaleContext};
use tempfile::TempDir;

#[test]
fn toggled_language_is_restored_on_next_start() {
    let dir = TempDir::new().unwrap();
    let store = LocaleStore::new(dir.path().join("state").join("state.toml"));

    let initial = LocaleContext::resolve_initial(None, None, Some(&store), None);
    assert_eq!(initial, Locale::En);

    let mut ctx = LocaleContext::new(initial, Some(store.clone()));
    ctx.toggle();
    assert_eq!(ctx.t("country.capital"), "Capital");
    assert_eq!(ctx.t("search.placeholder"), "Buscar países...");
    drop(ctx);

    let restored = LocaleContext::resolve_initial(None, None, Some(&store), Some("en_US.UTF-8"));
    assert_eq!(restored, Locale::Es);
}

#[test]
fn configured_locale_beats_stored_choice() {
    let dir = TempDir::new().unwrap();
    let store = LocaleStore::new(dir.path().join("state.toml"));
    store.write("es").unwrap();

    assert_eq!(
        LocaleContext::resolve_initial(None, Some("en"), Some(&store), None),
        Locale::En
    );
}

#[test]
fn unrelated_keys_survive_a_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "theme = \"dark\"\nlocale = \"en\"\n").unwrap();

    let store = LocaleStore::new(path.clone());
    store.write("es").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme = \"dark\""));
    assert_eq!(store.read().unwrap().as_deref(), Some("es"));
}

#[test]
fn corrupt_state_file_falls_back_without_failing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "locale = [not toml").unwrap();

    let store = LocaleStore::new(path);
    assert!(store.read().is_err());
    assert_eq!(
        LocaleContext::resolve_initial(None, None, Some(&store), Some("es_MX.UTF-8")),
        Locale::Es
    );
}

#[test]
fn unsupported_stored_tag_is_skipped() {
    let dir = TempDir::new().unwrap();
    let store = LocaleStore::new(dir.path().join("state.toml"));
    store.write("fr").unwrap();

    assert_eq!(
        LocaleContext::resolve_initial(None, None, Some(&store), None),
        Locale::En
    );
}
