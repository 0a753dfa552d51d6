use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Credentials passed validation and the login started.
    Submit,
    /// Credentials failed validation; nothing was written.
    Rejected { message: String },
    /// Login use case completed.
    Succeeded,
    /// Skip-login use case completed.
    Skipped,
    /// Login or skip failed.
    Failed { message: String },
}

impl Intent for LoginIntent {}
