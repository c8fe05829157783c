use std::time::{Duration, Instant};

use crate::api::{ApiResult, Country};
use crate::config::UiConfig;
use crate::debounce::Debouncer;
use crate::i18n::{Locale, LocaleContext};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::Reducer;
use crate::ui::worker::{UiCommand, UiCommandSender};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    list: ListState,
    detail: DetailState,
    locale: LocaleContext,
    /// Raw search input; the settled value drives filtering.
    search: Debouncer<String>,
    commands: Option<UiCommandSender>,
    ticks: usize,
}

impl App {
    pub fn new(ui: &UiConfig, locale: LocaleContext) -> Self {
        Self {
            should_quit: false,
            screen: Screen::List,
            list: ListState::new(ui.page_size),
            detail: DetailState::default(),
            locale,
            search: Debouncer::new(String::new(), Duration::from_millis(ui.debounce_ms)),
            commands: None,
            ticks: 0,
        }
    }

    pub fn attach_commands(&mut self, commands: UiCommandSender) {
        self.commands = Some(commands);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Search text as typed, including keystrokes not yet applied.
    pub fn search_text(&self) -> &str {
        self.search.latest()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_pending()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// How long the event loop may block before the next debounce deadline.
    pub fn next_wakeup(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.search
            .time_until_ready(now)
            .map_or(tick_rate, |left| left.min(tick_rate))
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        self.apply_settled_query(now);
    }

    /// Pushes the debounced query into the list once it has settled.
    pub fn apply_settled_query(&mut self, now: Instant) {
        if let Some(query) = self.search.poll(now) {
            tracing::debug!(query = %query, "search query settled");
            dispatch_mvi!(self, list, ListReducer, ListIntent::QueryChanged(query));
        }
    }

    // -- list -----------------------------------------------------------

    /// Starts a full fetch unless one is already in flight.
    pub fn request_fetch(&mut self, refresh: bool) {
        let before = self.list.generation;
        dispatch_mvi!(self, list, ListReducer, ListIntent::FetchStarted { refresh });
        if self.list.generation == before {
            tracing::debug!("fetch already in flight, ignoring request");
            return;
        }

        let generation = self.list.generation;
        if let Err(message) = self.send(UiCommand::FetchAll { generation }) {
            dispatch_mvi!(
                self,
                list,
                ListReducer,
                ListIntent::FetchFailed {
                    generation,
                    message,
                }
            );
        }
    }

    pub fn on_countries_loaded(&mut self, generation: u64, result: ApiResult<Vec<Country>>) {
        let intent = match result {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "countries loaded");
                ListIntent::FetchSucceeded {
                    generation,
                    countries,
                }
            }
            Err(err) => ListIntent::FetchFailed {
                generation,
                message: err.user_message(),
            },
        };
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    pub fn type_char(&mut self, ch: char, now: Instant) {
        let mut text = self.search.latest().clone();
        text.push(ch);
        self.search.update(text, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let mut text = self.search.latest().clone();
        if text.pop().is_some() {
            self.search.update(text, now);
        }
    }

    /// Clears the search box immediately, without waiting for the debounce.
    pub fn clear_query(&mut self) {
        self.search.force(String::new());
        if !self.list.query.is_empty() {
            dispatch_mvi!(self, list, ListReducer, ListIntent::QueryChanged(String::new()));
        }
    }

    pub fn load_more(&mut self) {
        dispatch_mvi!(self, list, ListReducer, ListIntent::LoadMore);
    }

    pub fn move_selection(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    // -- detail ---------------------------------------------------------

    pub fn open_selected(&mut self) {
        if let Some(code) = self.list.selected_country().map(|c| c.cca3.clone()) {
            self.open_detail(&code);
        }
    }

    /// Navigates to the detail route for `code`, fetching when not cached.
    pub fn open_detail(&mut self, code: &str) {
        let cached = self.list.find(code).cloned();
        dispatch_mvi!(
            self,
            detail,
            DetailReducer,
            DetailIntent::Open {
                code: code.to_string(),
                cached,
            }
        );
        self.screen = Screen::Detail;
        self.fetch_pending_detail();
    }

    pub fn on_country_loaded(&mut self, code: String, result: ApiResult<Vec<Country>>) {
        let result = match result {
            Ok(countries) => countries
                .into_iter()
                .next()
                .ok_or_else(|| crate::api::ApiError::NotFound.to_string()),
            Err(err) => Err(err.user_message()),
        };
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Fetched { code, result });
    }

    pub fn back(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
        self.screen = Screen::List;
    }

    fn fetch_pending_detail(&mut self) {
        let Some(code) = self.detail.pending_code().map(str::to_string) else {
            return;
        };
        if let Err(message) = self.send(UiCommand::FetchByCode { code: code.clone() }) {
            dispatch_mvi!(
                self,
                detail,
                DetailReducer,
                DetailIntent::Fetched {
                    code,
                    result: Err(message),
                }
            );
        }
    }

    // -- shared ---------------------------------------------------------

    /// Retry affordance of whichever error panel is showing.
    pub fn retry(&mut self) {
        match self.screen {
            Screen::List => {
                if self.list.error().is_some() {
                    self.request_fetch(false);
                }
            }
            Screen::Detail => {
                dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Retry);
                self.fetch_pending_detail();
            }
        }
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale.toggle()
    }

    fn send(&self, command: UiCommand) -> Result<(), String> {
        let Some(commands) = &self.commands else {
            return Err("API worker not running".to_string());
        };
        commands.try_send(command).map_err(|err| {
            tracing::warn!(error = %err, "could not queue API command");
            err.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_countries;
    use crate::api::ApiError;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::Receiver<UiCommand>) {
        let ui = UiConfig {
            page_size: 4,
            debounce_ms: 300,
            ..UiConfig::default()
        };
        let mut app = App::new(&ui, LocaleContext::new(Locale::En, None));
        let (tx, rx) = mpsc::channel(8);
        app.attach_commands(tx);
        (app, rx)
    }

    #[test]
    fn fetch_is_sent_once_while_in_flight() {
        let (mut app, mut rx) = app();
        app.request_fetch(false);
        app.request_fetch(true);
        assert_eq!(rx.try_recv().unwrap(), UiCommand::FetchAll { generation: 1 });
        assert!(rx.try_recv().is_err());

        app.on_countries_loaded(1, Ok(mock_countries()));
        app.request_fetch(true);
        assert_eq!(rx.try_recv().unwrap(), UiCommand::FetchAll { generation: 2 });
    }

    #[test]
    fn missing_worker_surfaces_failure() {
        let mut app = App::new(&UiConfig::default(), LocaleContext::new(Locale::En, None));
        app.request_fetch(false);
        assert_eq!(app.list().error(), Some("API worker not running"));
    }

    #[test]
    fn typing_filters_after_quiet_period() {
        let (mut app, _rx) = app();
        app.request_fetch(false);
        app.on_countries_loaded(1, Ok(mock_countries()));

        let start = Instant::now();
        app.type_char('j', start);
        app.type_char('a', start + Duration::from_millis(100));
        assert!(app.is_searching());
        assert_eq!(app.search_text(), "ja");

        app.on_tick(start + Duration::from_millis(200));
        assert_eq!(app.list().filtered.len(), 6);

        app.on_tick(start + Duration::from_millis(400));
        assert!(!app.is_searching());
        assert_eq!(app.list().query, "ja");
        assert_eq!(app.list().filtered.len(), 1);

        app.clear_query();
        assert_eq!(app.list().filtered.len(), 6);
        assert_eq!(app.search_text(), "");
    }

    #[test]
    fn detail_uses_memory_before_network() {
        let (mut app, mut rx) = app();
        app.request_fetch(false);
        let _ = rx.try_recv();
        app.on_countries_loaded(1, Ok(mock_countries()));

        app.open_selected();
        assert_eq!(app.screen(), Screen::Detail);
        assert!(matches!(app.detail(), DetailState::Loaded { country } if country.cca3 == "BRA"));
        assert!(rx.try_recv().is_err());

        app.back();
        app.open_detail("ZZZ");
        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::FetchByCode {
                code: "ZZZ".to_string()
            }
        );
        app.on_country_loaded("ZZZ".to_string(), Err(ApiError::NotFound));
        assert!(
            matches!(app.detail(), DetailState::Failed { message, .. } if message == "Country not found")
        );

        app.retry();
        assert_eq!(app.detail().pending_code(), Some("ZZZ"));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn next_wakeup_tracks_debounce_deadline() {
        let (mut app, _rx) = app();
        let tick = Duration::from_millis(50);
        let now = Instant::now();
        assert_eq!(app.next_wakeup(now, tick), tick);
        app.type_char('x', now);
        assert_eq!(app.next_wakeup(now + Duration::from_millis(280), tick), Duration::from_millis(20));
    }
}
