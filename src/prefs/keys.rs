/// Identifier for each persisted preference.
///
/// The `as_str()` value is the on-disk key. Once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    IsLoggedIn,
    SkipLogin,
    UserToken,
    UserId,
}

impl PrefKey {
    /// Stable key used in the preferences file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsLoggedIn => "is_logged_in",
            Self::SkipLogin => "skip_login",
            Self::UserToken => "user_token",
            Self::UserId => "user_id",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [PrefKey] {
        &[
            Self::IsLoggedIn,
            Self::SkipLogin,
            Self::UserToken,
            Self::UserId,
        ]
    }

    /// Parse from file key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "is_logged_in" => Some(Self::IsLoggedIn),
            "skip_login" => Some(Self::SkipLogin),
            "user_token" => Some(Self::UserToken),
            "user_id" => Some(Self::UserId),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrefKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
