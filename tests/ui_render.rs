//! Full-frame rendering against ratatui's in-memory backend.

use countries_explorer::api::mock::mock_countries;
use countries_explorer::api::ApiError;
use countries_explorer::config::UiConfig;
use countries_explorer::i18n::{Locale, LocaleContext};
use countries_explorer::ui::app::App;
use countries_explorer::ui::render::draw;
use countries_explorer::ui::worker::UiCommand;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

fn app_with_worker(locale: Locale) -> (App, mpsc::Receiver<UiCommand>) {
    let ui = UiConfig {
        page_size: 4,
        ..UiConfig::default()
    };
    let mut app = App::new(&ui, LocaleContext::new(locale, None));
    let (tx, rx) = mpsc::channel(8);
    app.attach_commands(tx);
    app.request_fetch(false);
    (app, rx)
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn loading_screen_shows_spinner_message() {
    let (app, _rx) = app_with_worker(Locale::En);
    let screen = render(&app);
    assert!(screen.contains("Loading countries from around the world..."));
    assert!(screen.contains("Countries Explorer"));
}

#[test]
fn list_screen_shows_rows_and_controls() {
    let (mut app, _rx) = app_with_worker(Locale::En);
    app.on_countries_loaded(1, Ok(mock_countries()));
    let screen = render(&app);

    assert!(screen.contains("Discover 6 countries around the world"));
    assert!(screen.contains("Search countries..."));
    assert!(screen.contains("Brazil"));
    assert!(screen.contains("Japan"));
    assert!(!screen.contains("Spain"));
    assert!(screen.contains("4 of 6 loaded"));
    assert!(screen.contains("Ctrl+Q Quit"));
}

#[test]
fn search_shows_stats_and_empty_state() {
    let (mut app, _rx) = app_with_worker(Locale::En);
    app.on_countries_loaded(1, Ok(mock_countries()));

    let start = Instant::now();
    for ch in "zzz".chars() {
        app.type_char(ch, start);
    }
    assert!(render(&app).contains("Searching..."));

    app.on_tick(start + Duration::from_secs(1));
    let screen = render(&app);
    assert!(screen.contains("No results found for \"zzz\""));
    assert!(screen.contains("No countries found"));
}

#[test]
fn failure_shows_error_panel_with_retry_hint() {
    let (mut app, _rx) = app_with_worker(Locale::En);
    app.on_countries_loaded(1, Err(ApiError::Status { status: 503 }));
    let screen = render(&app);

    assert!(screen.contains("Failed to load countries"));
    assert!(screen.contains("HTTP error! status: 503"));
    assert!(screen.contains("Press r to retry"));
}

#[test]
fn detail_screen_lists_every_field() {
    let (mut app, _rx) = app_with_worker(Locale::En);
    app.on_countries_loaded(1, Ok(mock_countries()));
    app.open_detail("BRA");
    let screen = render(&app);

    assert!(screen.contains("Country Detail"));
    assert!(screen.contains("Federative Republic of Brazil"));
    assert!(screen.contains("212,559,417 (212.6M)"));
    assert!(screen.contains("Americas"));
    assert!(screen.contains("https://flagcdn.com/br.svg"));
    assert!(screen.contains("Esc Back"));
}

#[test]
fn toggling_language_relabels_the_frame() {
    let (mut app, _rx) = app_with_worker(Locale::En);
    app.on_countries_loaded(1, Ok(mock_countries()));
    app.toggle_locale();
    let screen = render(&app);

    assert!(screen.contains("Buscar países..."));
    assert!(screen.contains("Español"));
    assert!(!screen.contains("Search countries..."));
}
