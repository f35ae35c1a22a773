use crate::error::Result;
use crate::github::ProfileApi;
use crate::orchestrator::ProfileFetchOrchestrator;
use crate::presenter::Presenter;
use crate::render::TerminalPresenter;
use crate::theme::ThemeStore;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Notify;
use tracing::{debug, info, warn};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    Filter(String),
    More,
    ToggleTheme,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Lookup(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "filter" | "f" => Command::Filter(arg.to_string()),
            "more" | "m" => Command::More,
            "theme" => Command::ToggleTheme,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

/// Ctrl-C as seen by the session. One listener is registered for the whole
/// session, so SIGINT keeps working between lookups.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    notify: Arc<Notify>,
}

impl Interrupt {
    /// Not wired to any signal; fire it with [`Interrupt::trigger`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward every Ctrl-C the process receives.
    pub fn ctrl_c() -> Self {
        let interrupt = Self::new();
        let notify = interrupt.notify.clone();
        tokio::spawn(async move {
            loop {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                    return;
                }
                notify.notify_one();
            }
        });
        interrupt
    }

    pub fn trigger(&self) {
        self.notify.notify_one();
    }

    pub async fn wait(&self) {
        self.notify.notified().await;
    }
}

/// Read commands until `/quit`, end of input or Ctrl-C at the prompt. Ctrl-C
/// during a lookup abandons it and the session continues.
pub async fn run<A, R, W>(
    orchestrator: &mut ProfileFetchOrchestrator<A>,
    presenter: &mut TerminalPresenter<W>,
    themes: &ThemeStore,
    input: R,
    interrupt: &Interrupt,
) -> Result<()>
where
    A: ProfileApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    presenter.set_idle_banner_visible(true);
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = interrupt.wait() => {
                info!("Interrupted at prompt");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Command::Lookup(username) => {
                let cancelled = tokio::select! {
                    _ = orchestrator.load(&username, presenter) => false,
                    _ = interrupt.wait() => true,
                };
                if cancelled {
                    orchestrator.cancel(presenter);
                }
            }
            Command::Filter(text) => {
                orchestrator.set_filter(&text, presenter);
            }
            Command::More => {
                orchestrator.expand(presenter);
            }
            Command::ToggleTheme => {
                let theme = themes.toggle()?;
                presenter.set_theme(theme);
                info!(?theme, "Theme changed");
            }
            Command::Help => presenter.print_help(),
            Command::Quit => break,
            Command::Unknown(name) => presenter.print_unknown_command(&name),
        }

        tokio::select! {
            _ = presenter.reveal() => {}
            _ = interrupt.wait() => debug!("Reveal interrupted"),
        }
    }

    Ok(())
}
