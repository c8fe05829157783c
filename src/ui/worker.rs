//! Runs API calls off the UI thread.
//!
//! Each command is served on its own task so a slow list fetch never delays
//! a detail lookup. Results go back through the UI event queue.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::CountryService;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchAll { generation: u64 },
    FetchByCode { code: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

const COMMAND_QUEUE: usize = 16;

pub fn spawn_worker<S: CountryService>(
    runtime: &Handle,
    service: Arc<S>,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            tracing::debug!(?command, "worker command");
            let service = Arc::clone(&service);
            let events = events.clone();
            tokio::spawn(async move {
                let event = match command {
                    UiCommand::FetchAll { generation } => AppEvent::CountriesLoaded {
                        generation,
                        result: service.fetch_all().await,
                    },
                    UiCommand::FetchByCode { code } => {
                        let result = service.fetch_by_code(&code).await;
                        AppEvent::CountryLoaded { code, result }
                    }
                };
                if events.send(event).is_err() {
                    tracing::trace!("worker result dropped (UI gone)");
                }
            });
        }
    });

    tx
}
