use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::LoginUiState;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginUiState;
    type Intent = LoginIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Submit => LoginUiState::Loading,
            LoginIntent::Rejected { message } | LoginIntent::Failed { message } => {
                LoginUiState::Error(message)
            }
            LoginIntent::Succeeded => LoginUiState::Success,
            LoginIntent::Skipped => LoginUiState::Skipped,
        }
    }
}
