//! Auth status derivation.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::prefs::StoreError;

use super::repository::FieldStream;

/// Whether the user may proceed past the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Skipping login counts as authenticated for navigation purposes.
pub fn derive_auth_status(logged_in: bool, skip_login: bool) -> AuthStatus {
    if logged_in || skip_login {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Unauthenticated
    }
}

/// Combine-latest of the logged-in and skip-login streams.
///
/// Emits once both sources have produced a value, then again on every
/// later emission from either. Source errors are forwarded as items.
/// Ends once both sources have ended.
pub struct AuthStatusStream {
    logged_in: FieldStream<bool>,
    skip_login: FieldStream<bool>,
    latest_logged_in: Option<bool>,
    latest_skip_login: Option<bool>,
    logged_in_done: bool,
    skip_login_done: bool,
    /// Alternates which source is polled first so neither starves.
    skip_first: bool,
}

enum Source {
    LoggedIn,
    SkipLogin,
}

impl AuthStatusStream {
    pub fn new(logged_in: FieldStream<bool>, skip_login: FieldStream<bool>) -> Self {
        Self {
            logged_in,
            skip_login,
            latest_logged_in: None,
            latest_skip_login: None,
            logged_in_done: false,
            skip_login_done: false,
            skip_first: false,
        }
    }

    fn current(&self) -> Option<AuthStatus> {
        match (self.latest_logged_in, self.latest_skip_login) {
            (Some(logged_in), Some(skip)) => Some(derive_auth_status(logged_in, skip)),
            _ => None,
        }
    }

    /// Poll one source. `Some` carries an item to yield.
    fn poll_source(
        &mut self,
        source: Source,
        cx: &mut Context<'_>,
        progressed: &mut bool,
    ) -> Option<Result<AuthStatus, StoreError>> {
        let (stream, latest, done) = match source {
            Source::LoggedIn => (
                &mut self.logged_in,
                &mut self.latest_logged_in,
                &mut self.logged_in_done,
            ),
            Source::SkipLogin => (
                &mut self.skip_login,
                &mut self.latest_skip_login,
                &mut self.skip_login_done,
            ),
        };
        if *done {
            return None;
        }
        match stream.as_mut().poll_next(cx) {
            Poll::Ready(Some(Ok(value))) => {
                *latest = Some(value);
                *progressed = true;
                self.current().map(Ok)
            }
            Poll::Ready(Some(Err(err))) => {
                *progressed = true;
                Some(Err(err))
            }
            Poll::Ready(None) => {
                *done = true;
                *progressed = true;
                None
            }
            Poll::Pending => None,
        }
    }
}

impl Stream for AuthStatusStream {
    type Item = Result<AuthStatus, StoreError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        loop {
            let order = if this.skip_first {
                [Source::SkipLogin, Source::LoggedIn]
            } else {
                [Source::LoggedIn, Source::SkipLogin]
            };
            this.skip_first = !this.skip_first;

            let mut progressed = false;
            for source in order {
                if let Some(item) = this.poll_source(source, cx, &mut progressed) {
                    return Poll::Ready(Some(item));
                }
            }

            if this.logged_in_done && this.skip_login_done {
                return Poll::Ready(None);
            }
            if !progressed {
                return Poll::Pending;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_both_false_is_unauthenticated() {
        let cases = [
            (false, false, AuthStatus::Unauthenticated),
            (true, false, AuthStatus::Authenticated),
            (false, true, AuthStatus::Authenticated),
            (true, true, AuthStatus::Authenticated),
        ];
        for (logged_in, skip, expected) in cases {
            assert_eq!(
                derive_auth_status(logged_in, skip),
                expected,
                "logged_in={logged_in} skip={skip}"
            );
        }
    }

    #[test]
    fn authenticated_helper() {
        assert!(AuthStatus::Authenticated.is_authenticated());
        assert!(!AuthStatus::Unauthenticated.is_authenticated());
    }
}
