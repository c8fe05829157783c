use crate::api::Country;
use crate::pagination::Paginator;
use crate::ui::mvi::UiState;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    /// Re-fetching while previous rows stay on screen.
    Refreshing,
    Failed {
        message: String,
    },
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub phase: LoadPhase,
    /// Full collection sorted by common name.
    pub countries: Vec<Country>,
    /// Settled search text.
    pub query: String,
    /// `countries` narrowed by `query`, same order.
    pub filtered: Vec<Country>,
    /// Rows revealed so far through "load more".
    pub pages: Paginator<Country>,
    /// Index into the revealed rows.
    pub selected: usize,
    /// Generation of the latest fetch request.
    pub generation: u64,
    pub in_flight: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for ListState {}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: LoadPhase::Idle,
            countries: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            pages: Paginator::new(page_size),
            selected: 0,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn visible(&self) -> &[Country] {
        self.pages.items()
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.visible().get(self.selected)
    }

    pub fn has_more(&self) -> bool {
        self.pages.has_more(&self.filtered)
    }

    /// In-memory lookup used when navigating to a detail route.
    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.cca3.eq_ignore_ascii_case(code))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}
