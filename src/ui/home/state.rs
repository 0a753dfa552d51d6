use crate::ui::mvi::UiState;

/// Mirror of the two persisted auth flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeUiState {
    pub logged_in: bool,
    pub skip_login: bool,
}

impl UiState for HomeUiState {}

impl HomeUiState {
    /// A real login takes precedence over a skip.
    pub fn status(&self) -> HomeStatus {
        if self.logged_in {
            HomeStatus::LoggedIn
        } else if self.skip_login {
            HomeStatus::Skipped
        } else {
            HomeStatus::Guest
        }
    }
}

/// What the home screen reports about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeStatus {
    LoggedIn,
    Skipped,
    Guest,
}

impl HomeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoggedIn => "Logged in",
            Self::Skipped => "Login skipped",
            Self::Guest => "Not logged in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_wins_over_skip() {
        let state = HomeUiState {
            logged_in: true,
            skip_login: true,
        };
        assert_eq!(state.status(), HomeStatus::LoggedIn);
    }

    #[test]
    fn status_per_flag() {
        let skipped = HomeUiState {
            logged_in: false,
            skip_login: true,
        };
        assert_eq!(skipped.status(), HomeStatus::Skipped);
        assert_eq!(HomeUiState::default().status(), HomeStatus::Guest);
    }
}
