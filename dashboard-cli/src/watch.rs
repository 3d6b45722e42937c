//! Interactive dashboard loop.

use anyhow::{Context, Result};
use console::Term;
use dashboard_core::{Action, Session, Viewport};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const HELP: &str = concat!(
    "Type a city to search | :r refresh | :u switch units | ",
    ":a toggle auto-refresh | :q quit"
);

/// One line of user input.
#[derive(Debug)]
enum Input {
    Dispatch(Action),
    Unknown,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let input = match line {
        ":q" | ":quit" => Input::Quit,
        ":r" | ":refresh" => Input::Dispatch(Action::Refresh),
        ":u" | ":units" => Input::Dispatch(Action::ToggleUnit),
        ":a" | ":auto" => Input::Dispatch(Action::ToggleAutoRefresh),
        cmd if cmd.starts_with(':') => Input::Unknown,
        city => Input::Dispatch(Action::Submit(city.to_string())),
    };
    Some(input)
}

pub async fn run(mut session: Session, city: Option<String>, viewport: Viewport) -> Result<()> {
    let term = Term::stdout();

    if let Some(city) = city {
        session.dispatch(Action::Submit(city));
    }
    redraw(&term, &session, viewport)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match parse_input(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Dispatch(action)) => session.dispatch(action),
                    Some(Input::Unknown) => tracing::debug!(input = %line, "unknown command"),
                    None => {}
                }
            }
            Some(action) = session.next_action() => session.dispatch(action),
        }

        redraw(&term, &session, viewport)?;
    }

    Ok(())
}

fn redraw(term: &Term, session: &Session, viewport: Viewport) -> Result<()> {
    term.clear_screen().context("Failed to clear terminal")?;
    let screen = render::render(session.dashboard(), viewport, &chrono::Local);
    term.write_str(&screen).context("Failed to write to terminal")?;
    term.write_line("").context("Failed to write to terminal")?;
    term.write_line(HELP).context("Failed to write to terminal")?;
    Ok(())
}
