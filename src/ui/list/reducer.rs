use crate::api::model::sort_by_name;
use crate::api::Country;
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{ListState, LoadPhase};
use crate::ui::mvi::Reducer;

/// Rows skipped by PageUp/PageDown.
const PAGE_JUMP: usize = 10;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::FetchStarted { refresh } => {
                if state.in_flight {
                    return state;
                }
                state.generation += 1;
                state.in_flight = true;
                state.phase = if refresh && !state.countries.is_empty() {
                    LoadPhase::Refreshing
                } else {
                    LoadPhase::Loading
                };
                state
            }
            ListIntent::FetchSucceeded {
                generation,
                mut countries,
            } => {
                if generation != state.generation {
                    return state;
                }
                sort_by_name(&mut countries);
                state.countries = countries;
                state.in_flight = false;
                state.phase = LoadPhase::Ready;
                apply_query(state)
            }
            ListIntent::FetchFailed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                state.in_flight = false;
                state.phase = LoadPhase::Failed { message };
                state
            }
            ListIntent::QueryChanged(query) => {
                state.query = query;
                apply_query(state)
            }
            ListIntent::LoadMore => {
                state.pages.load_more(&state.filtered, cca3_key);
                state
            }
            ListIntent::MoveUp => {
                state.selected = state.selected.saturating_sub(1);
                state
            }
            ListIntent::MoveDown => move_down(state, 1),
            ListIntent::PageUp => {
                state.selected = state.selected.saturating_sub(PAGE_JUMP);
                state
            }
            ListIntent::PageDown => move_down(state, PAGE_JUMP),
        }
    }
}

fn cca3_key(country: &Country) -> String {
    country.cca3.clone()
}

/// Re-filters the collection and restarts paging at page 1.
fn apply_query(mut state: ListState) -> ListState {
    state.filtered = state
        .countries
        .iter()
        .filter(|c| c.matches_query(&state.query))
        .cloned()
        .collect();
    state.pages.reset(&state.filtered, cca3_key);
    state.selected = 0;
    state
}

fn move_down(mut state: ListState, by: usize) -> ListState {
    let last = state.visible().len().saturating_sub(1);
    state.selected = state.selected.saturating_add(by).min(last);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_countries;

    fn ready(page_size: usize) -> ListState {
        let state = ListReducer::reduce(
            ListState::new(page_size),
            ListIntent::FetchStarted { refresh: false },
        );
        ListReducer::reduce(
            state,
            ListIntent::FetchSucceeded {
                generation: 1,
                countries: mock_countries(),
            },
        )
    }

    #[test]
    fn success_sorts_and_reveals_first_page() {
        let state = ready(4);
        assert_eq!(state.phase, LoadPhase::Ready);
        let names: Vec<_> = state.visible().iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Brazil", "France", "Germany", "Japan"]);
        assert!(state.has_more());
    }

    #[test]
    fn duplicate_start_is_ignored_while_in_flight() {
        let state = ListReducer::reduce(
            ListState::default(),
            ListIntent::FetchStarted { refresh: false },
        );
        let again = ListReducer::reduce(state.clone(), ListIntent::FetchStarted { refresh: true });
        assert_eq!(again, state);
        assert_eq!(again.generation, 1);
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut state = ready(10);
        state = ListReducer::reduce(state, ListIntent::FetchStarted { refresh: true });
        assert_eq!(state.phase, LoadPhase::Refreshing);

        let stale = ListReducer::reduce(
            state.clone(),
            ListIntent::FetchFailed {
                generation: 1,
                message: "late".to_string(),
            },
        );
        assert_eq!(stale, state);
    }

    #[test]
    fn query_filters_and_resets_paging() {
        let mut state = ready(2);
        state = ListReducer::reduce(state, ListIntent::LoadMore);
        state = ListReducer::reduce(state, ListIntent::MoveDown);
        assert_eq!(state.visible().len(), 4);

        state = ListReducer::reduce(state, ListIntent::QueryChanged("an".to_string()));
        let codes: Vec<_> = state.filtered.iter().map(|c| c.cca3.as_str()).collect();
        assert_eq!(codes, vec!["FRA", "DEU", "JPN"]);
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.pages.current_page(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_stays_within_revealed_rows() {
        let mut state = ready(3);
        for _ in 0..10 {
            state = ListReducer::reduce(state, ListIntent::MoveDown);
        }
        assert_eq!(state.selected, 2);
        state = ListReducer::reduce(state, ListIntent::PageUp);
        assert_eq!(state.selected, 0);
        state = ListReducer::reduce(state, ListIntent::MoveUp);
        assert_eq!(state.selected, 0);
    }
}
