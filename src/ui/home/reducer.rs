use crate::ui::mvi::Reducer;

use super::intent::HomeIntent;
use super::state::HomeUiState;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeUiState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::LoggedInChanged(logged_in) => HomeUiState { logged_in, ..state },
            HomeIntent::SkipLoginChanged(skip_login) => HomeUiState { skip_login, ..state },
        }
    }
}
