use crate::domain::AuthStatus;
use crate::ui::mvi::Reducer;

use super::intent::SplashIntent;
use super::state::SplashUiState;

/// Loading resolves exactly once; navigation states absorb every intent.
pub struct SplashReducer;

impl Reducer for SplashReducer {
    type State = SplashUiState;
    type Intent = SplashIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_terminal() {
            return state;
        }
        match intent {
            SplashIntent::AuthResolved(AuthStatus::Authenticated) => SplashUiState::NavigateToHome,
            SplashIntent::AuthResolved(AuthStatus::Unauthenticated) => {
                SplashUiState::NavigateToLogin
            }
            SplashIntent::AuthUnavailable => SplashUiState::NavigateToLogin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_goes_home() {
        let next = SplashReducer::reduce(
            SplashUiState::Loading,
            SplashIntent::AuthResolved(AuthStatus::Authenticated),
        );
        assert_eq!(next, SplashUiState::NavigateToHome);
    }

    #[test]
    fn unauthenticated_goes_to_login() {
        let next = SplashReducer::reduce(
            SplashUiState::Loading,
            SplashIntent::AuthResolved(AuthStatus::Unauthenticated),
        );
        assert_eq!(next, SplashUiState::NavigateToLogin);
    }

    #[test]
    fn unavailable_status_falls_back_to_login() {
        let next = SplashReducer::reduce(SplashUiState::Loading, SplashIntent::AuthUnavailable);
        assert_eq!(next, SplashUiState::NavigateToLogin);
    }

    #[test]
    fn navigation_states_are_terminal() {
        let home = SplashReducer::reduce(
            SplashUiState::NavigateToHome,
            SplashIntent::AuthResolved(AuthStatus::Unauthenticated),
        );
        assert_eq!(home, SplashUiState::NavigateToHome);

        let login = SplashReducer::reduce(
            SplashUiState::NavigateToLogin,
            SplashIntent::AuthResolved(AuthStatus::Authenticated),
        );
        assert_eq!(login, SplashUiState::NavigateToLogin);
    }
}
