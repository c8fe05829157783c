use crate::api::CountryService;
use crate::config::UiConfig;
use crate::i18n::LocaleContext;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::worker::spawn_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Runs the interactive browser until the user quits.
///
/// Blocks the calling thread; API calls run on `runtime`.
pub fn run<S: CountryService>(
    runtime: &Handle,
    service: Arc<S>,
    ui: &UiConfig,
    locale: LocaleContext,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(ui.tick_ms.max(10));
    let (mut terminal, guard) = TerminalGuard::enter()?;
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(ui, locale);
    app.attach_commands(spawn_worker(runtime, service, events.sender()));
    app.request_fetch(false);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let now = Instant::now();
        match events.next(app.next_wakeup(now, tick_rate)) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::CountriesLoaded { generation, result }) => {
                app.on_countries_loaded(generation, result)
            }
            Ok(AppEvent::CountryLoaded { code, result }) => app.on_country_loaded(code, result),
            Err(RecvTimeoutError::Timeout) => app.apply_settled_query(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    guard.restore();
    Ok(())
}
