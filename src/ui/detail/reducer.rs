use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { code, cached } => match cached {
                Some(country) => DetailState::Loaded { country },
                None => DetailState::Loading {
                    code: code.to_ascii_uppercase(),
                },
            },
            DetailIntent::Fetched { code, result } => match state {
                DetailState::Loading { code: pending } if pending.eq_ignore_ascii_case(&code) => {
                    match result {
                        Ok(country) => DetailState::Loaded { country },
                        Err(message) => DetailState::Failed {
                            code: pending,
                            message,
                        },
                    }
                }
                // Response for a route the user already left.
                other => other,
            },
            DetailIntent::Retry => match state {
                DetailState::Failed { code, .. } => DetailState::Loading { code },
                other => other,
            },
            DetailIntent::Close => DetailState::Hidden,
        }
    }
}
