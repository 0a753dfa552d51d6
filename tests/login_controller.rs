//! Login controller: validation, login, skip and teardown.

mod common;

use std::time::Duration;

use common::*;
use haepari::domain::{AuthStatus, GetAuthStatusUseCase};
use haepari::navigation::Route;
use haepari::ui::login::{LoginUiState, MISSING_CREDENTIALS};
use tokio_stream::StreamExt;

#[tokio::test]
async fn successful_login_persists_session() {
    let (_dir, store) = temp_store();
    let ctx = context(store.clone());
    let login = ctx.login_controller();

    login.login("a@b.com", "pw");
    assert_eq!(login.state(), LoginUiState::Loading);

    login.idle().await;
    assert_eq!(login.state(), LoginUiState::Success);
    assert_eq!(login.state().destination(), Some(Route::Home));

    assert!(store.is_logged_in());
    let token = store.user_token().expect("token written");
    assert!(!token.is_empty());
    assert_eq!(store.user_id().as_deref(), Some("a@b.com"));

    let mut status = GetAuthStatusUseCase::new(store.clone()).execute();
    assert_eq!(
        status.next().await.unwrap().unwrap(),
        AuthStatus::Authenticated
    );
}

#[tokio::test]
async fn blank_email_is_rejected_without_writes() {
    let (_dir, store) = temp_store();
    let ctx = context(store.clone());
    let login = ctx.login_controller();

    login.login("", "pw");
    assert_eq!(
        login.state(),
        LoginUiState::Error(MISSING_CREDENTIALS.to_string())
    );

    login.idle().await;
    assert!(!store.path().exists());
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn blank_password_is_rejected_without_writes() {
    let repo = ScriptedRepository::new(Behavior::Healthy);
    let ctx = context(repo.clone());
    let login = ctx.login_controller();

    login.login("a@b.com", "");
    assert_eq!(login.state().error_message(), Some(MISSING_CREDENTIALS));

    login.login("a@b.com", "   ");
    assert_eq!(login.state().error_message(), Some(MISSING_CREDENTIALS));

    login.idle().await;
    assert!(repo.writes().is_empty());
}

#[tokio::test]
async fn write_failure_becomes_error_state() {
    let repo = ScriptedRepository::new(Behavior::FailWrites);
    let ctx = context(repo.clone());
    let login = ctx.login_controller();

    login.login("a@b.com", "pw");
    login.idle().await;

    let state = login.state();
    let message = state.error_message().expect("error state");
    assert!(message.contains("disk unavailable"), "got {message}");
    assert!(state.accepts_input());
    assert_eq!(state.destination(), None);
}

#[tokio::test]
async fn error_is_recoverable_by_retrying() {
    let (_dir, store) = temp_store();
    let ctx = context(store.clone());
    let login = ctx.login_controller();

    login.login(" ", "pw");
    assert!(login.state().error_message().is_some());

    login.login("a@b.com", "pw");
    login.idle().await;
    assert_eq!(login.state(), LoginUiState::Success);
}

#[tokio::test]
async fn skip_sets_flag_and_leaves_logged_in_alone() {
    let (_dir, store) = temp_store();
    let ctx = context(store.clone());
    let login = ctx.login_controller();

    login.skip_login();
    login.idle().await;

    assert_eq!(login.state(), LoginUiState::Skipped);
    assert_eq!(login.state().destination(), Some(Route::Home));
    assert!(store.is_skip_login());
    assert!(!store.is_logged_in());
    assert_eq!(store.snapshot().is_logged_in, None);
}

#[tokio::test]
async fn skipping_twice_is_idempotent() {
    let (_dir, store) = temp_store();
    let ctx = context(store.clone());
    let login = ctx.login_controller();

    login.skip_login();
    login.idle().await;
    let once = store.snapshot();

    login.skip_login();
    login.idle().await;

    assert_eq!(store.snapshot(), once);
    assert_eq!(login.state(), LoginUiState::Skipped);
}

#[tokio::test]
async fn skip_failure_becomes_error_state() {
    let repo = ScriptedRepository::new(Behavior::FailWrites);
    let ctx = context(repo.clone());
    let login = ctx.login_controller();

    login.skip_login();
    login.idle().await;

    assert!(login.state().error_message().is_some());
    assert_eq!(repo.writes(), vec!["skip_login"]);
}

#[tokio::test(start_paused = true)]
async fn disposed_login_never_completes() {
    let (_dir, store) = temp_store();
    let ctx = context_with_delays(store.clone(), Duration::ZERO, Duration::from_secs(1));
    let login = ctx.login_controller();
    let rx = login.subscribe();

    login.login("a@b.com", "pw");
    assert_eq!(*rx.borrow(), LoginUiState::Loading);
    drop(login);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(*rx.borrow(), LoginUiState::Loading);
    assert!(!store.is_logged_in());
}

#[tokio::test(start_paused = true)]
async fn login_waits_for_simulated_auth() {
    let repo = ScriptedRepository::new(Behavior::Healthy);
    let ctx = context_with_delays(repo.clone(), Duration::ZERO, Duration::from_secs(1));
    let login = ctx.login_controller();

    login.login("a@b.com", "pw");
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(login.state(), LoginUiState::Loading);
    assert!(repo.writes().is_empty());

    login.idle().await;
    assert_eq!(login.state(), LoginUiState::Success);
    assert_eq!(repo.writes(), vec!["is_logged_in", "user_token", "user_id"]);
}
