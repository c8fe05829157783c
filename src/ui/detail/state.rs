use crate::api::Country;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Hidden,
    Loading {
        code: String,
    },
    Loaded {
        country: Country,
    },
    Failed {
        code: String,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Code still waiting for a response, if any.
    pub fn pending_code(&self) -> Option<&str> {
        match self {
            Self::Loading { code } => Some(code),
            _ => None,
        }
    }
}
