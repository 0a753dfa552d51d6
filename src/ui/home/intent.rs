use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum HomeIntent {
    LoggedInChanged(bool),
    SkipLoginChanged(bool),
}

impl Intent for HomeIntent {}
