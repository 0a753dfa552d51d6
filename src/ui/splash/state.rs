use crate::navigation::Route;
use crate::ui::mvi::UiState;

/// Splash screen state. Both navigation states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashUiState {
    #[default]
    Loading,
    NavigateToLogin,
    NavigateToHome,
}

impl UiState for SplashUiState {}

impl SplashUiState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Route the presentation layer should switch to, once decided.
    pub fn destination(&self) -> Option<Route> {
        match self {
            Self::Loading => None,
            Self::NavigateToLogin => Some(Route::Login),
            Self::NavigateToHome => Some(Route::Home),
        }
    }
}
