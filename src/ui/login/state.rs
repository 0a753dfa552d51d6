use crate::navigation::Route;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginUiState {
    #[default]
    Idle,
    Loading,
    Success,
    Skipped,
    Error(String),
}

impl UiState for LoginUiState {}

impl LoginUiState {
    /// Whether the login and skip controls should be enabled.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Both a real login and a skip lead to the home screen.
    pub fn destination(&self) -> Option<Route> {
        match self {
            Self::Success | Self::Skipped => Some(Route::Home),
            _ => None,
        }
    }
}
