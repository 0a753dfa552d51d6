//! Line-oriented front end for the navigation graph.
//!
//! Works over any async reader/writer pair; the binary wires it to
//! stdin/stdout and tests drive it with in-memory buffers.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio_stream::StreamExt;

use crate::app::AppContext;
use crate::domain::FieldStream;
use crate::navigation::{NavGraph, Route};
use crate::ui::home::{HomeController, HomeStatus, HomeUiState};

const TITLE: &str = "Haepari Sample";
const SKIP_COMMAND: &str = "skip";

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `quit` on the home screen.
    Quit,
    /// Input closed.
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub route: Route,
    pub reason: ExitReason,
    /// Routes visited, starting with `splash`.
    pub visited: Vec<Route>,
}

/// Run the flow from the splash screen until `quit` or end of input.
pub async fn run<R, W>(ctx: &AppContext, input: R, output: &mut W) -> io::Result<RunOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut graph = NavGraph::new();

    let reason = loop {
        let next = match graph.current() {
            Route::Splash => splash_screen(ctx, output).await?,
            Route::Login => match login_screen(ctx, &mut lines, output).await? {
                Some(route) => route,
                None => break ExitReason::EndOfInput,
            },
            Route::Home => break home_screen(ctx, &mut lines, output).await?,
        };

        tokio::time::sleep(ctx.timing().navigation_delay()).await;
        graph.navigate(next).map_err(io::Error::other)?;
    };

    let mut visited = vec![Route::START];
    visited.extend(graph.history().iter().map(|entry| entry.to));
    Ok(RunOutcome {
        route: graph.current(),
        reason,
        visited,
    })
}

async fn splash_screen<W>(ctx: &AppContext, output: &mut W) -> io::Result<Route>
where
    W: AsyncWrite + Unpin,
{
    write_line(output, TITLE).await?;
    write_line(output, "Loading...").await?;

    let splash = ctx.splash_controller();
    let route = splash.destination().await;
    splash.dispose();
    Ok(route)
}

async fn login_screen<R, W>(
    ctx: &AppContext,
    lines: &mut Lines<R>,
    output: &mut W,
) -> io::Result<Option<Route>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(output, "== Login ==").await?;
    let login = ctx.login_controller();

    loop {
        write_prompt(output, &format!("Email (or '{}'): ", SKIP_COMMAND)).await?;
        let Some(email) = lines.next_line().await? else {
            return Ok(None);
        };

        if email.trim() == SKIP_COMMAND {
            login.skip_login();
        } else {
            write_prompt(output, "Password: ").await?;
            let Some(password) = lines.next_line().await? else {
                return Ok(None);
            };
            login.login(email.trim(), &password);
            if !login.state().accepts_input() {
                write_line(output, "Signing in...").await?;
            }
        }

        login.idle().await;
        let state = login.state();
        if let Some(route) = state.destination() {
            return Ok(Some(route));
        }
        if let Some(message) = state.error_message() {
            write_line(output, &format!("Error: {}", message)).await?;
        }
    }
}

async fn home_screen<R, W>(
    ctx: &AppContext,
    lines: &mut Lines<R>,
    output: &mut W,
) -> io::Result<ExitReason>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let home = ctx.home_controller();
    write_line(output, "== Home ==").await?;
    write_status(output, current_status(&home).await).await?;

    loop {
        write_prompt(output, "Command (status, logout, quit): ").await?;
        let Some(command) = lines.next_line().await? else {
            home.dispose();
            return Ok(ExitReason::EndOfInput);
        };

        match command.trim() {
            "status" => write_status(output, current_status(&home).await).await?,
            "logout" => {
                home.logout();
                home.idle().await;
                write_status(output, current_status(&home).await).await?;
            }
            "quit" => {
                home.dispose();
                return Ok(ExitReason::Quit);
            }
            "" => {}
            other => write_line(output, &format!("Unknown command '{}'", other)).await?,
        }
    }
}

/// Read the current flags through the home projections.
async fn current_status(home: &HomeController) -> HomeStatus {
    HomeUiState {
        logged_in: first_value(home.logged_in()).await,
        skip_login: first_value(home.skip_login()).await,
    }
    .status()
}

async fn first_value(mut stream: FieldStream<bool>) -> bool {
    match stream.next().await {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "Flag unavailable, assuming false");
            false
        }
        None => false,
    }
}

async fn write_status<W>(output: &mut W, status: HomeStatus) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_line(output, &format!("Status: {}", status.label())).await
}

async fn write_line<W>(output: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

async fn write_prompt<W>(output: &mut W, prompt: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await
}
