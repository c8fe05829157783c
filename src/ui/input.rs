use crate::ui::app::{App, Screen};
use crate::ui::list::ListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.toggle_locale();
        return;
    }

    match app.screen() {
        Screen::List => handle_list_key(app, key, now),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, now: Instant) {
    if is_ctrl_char(key, 'r') {
        app.request_fetch(true);
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.load_more();
        return;
    }

    // The error panel replaces the search box, so plain keys act on it.
    if app.list().error().is_some() {
        if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
            app.retry();
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.move_selection(ListIntent::MoveUp),
        KeyCode::Down => app.move_selection(ListIntent::MoveDown),
        KeyCode::PageUp => app.move_selection(ListIntent::PageUp),
        KeyCode::PageDown => app.move_selection(ListIntent::PageDown),
        KeyCode::Tab => app.load_more(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Esc => app.clear_query(),
        KeyCode::Backspace => app.backspace(now),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.type_char(ch, now),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.back(),
        KeyCode::Char('r') => app.retry(),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_countries;
    use crate::config::UiConfig;
    use crate::i18n::{Locale, LocaleContext};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn loaded_app() -> App {
        let mut app = App::new(&UiConfig::default(), LocaleContext::new(Locale::En, None));
        app.request_fetch(false);
        let generation = app.list().generation;
        app.on_countries_loaded(generation, Ok(mock_countries()));
        app
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = loaded_app();
        handle_key(&mut app, ctrl('q'), Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_l_toggles_language() {
        let mut app = loaded_app();
        handle_key(&mut app, ctrl('l'), Instant::now());
        assert_eq!(app.locale().locale(), Locale::Es);
        assert!(!app.should_quit());
    }

    #[test]
    fn printable_keys_edit_search() {
        let mut app = loaded_app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Char('f')), now);
        handle_key(&mut app, press(KeyCode::Char('r')), now);
        handle_key(&mut app, press(KeyCode::Backspace), now);
        assert_eq!(app.search_text(), "f");
    }

    #[test]
    fn enter_opens_detail_and_esc_returns() {
        let mut app = loaded_app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Down), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert_eq!(app.screen(), Screen::Detail);
        handle_key(&mut app, press(KeyCode::Esc), now);
        assert_eq!(app.screen(), Screen::List);
    }

    #[test]
    fn enter_opens_the_row_on_screen_before_query_settles() {
        let mut app = loaded_app();
        let start = Instant::now();
        let on_screen = app.list().selected_country().map(|c| c.cca3.clone());
        handle_key(&mut app, press(KeyCode::Char('w')), start);
        handle_key(
            &mut app,
            press(KeyCode::Enter),
            start + std::time::Duration::from_secs(5),
        );
        assert_eq!(app.screen(), Screen::Detail);
        assert!(on_screen.is_some());
        assert_eq!(app.list().selected_country().map(|c| c.cca3.clone()), on_screen);
    }
}
