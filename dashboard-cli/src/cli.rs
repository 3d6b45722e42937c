use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dashboard_core::{
    Action, ClientConfig, Config, Dashboard, OpenWeatherProvider, Session, Unit, Viewport,
};
use inquire::{Confirm, Password, PasswordDisplayMode, Select};

use crate::{render, watch};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Current weather in your terminal")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Unit system: "metric" or "imperial". Defaults to the configured one.
    #[arg(long, value_parser = parse_unit)]
    pub units: Option<Unit>,

    /// Viewport width in pixels; below 768 dates use the short form.
    #[arg(long, default_value_t = 1024)]
    pub width: u32,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default preferences.
    Configure,

    /// Look up a city once and print its current weather.
    Show {
        /// City name, e.g. "Austin" or "Paris,FR".
        city: String,

        #[command(flatten)]
        display: DisplayArgs,

        /// Print the raw report as JSON instead of the card.
        #[arg(long)]
        json: bool,
    },

    /// Interactive dashboard with auto-refresh.
    Watch {
        /// City to load on start.
        city: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,

        /// Start with auto-refresh turned off.
        #[arg(long)]
        no_auto_refresh: bool,
    },
}

fn parse_unit(value: &str) -> Result<Unit, String> {
    Unit::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, display, json } => show(city, display, json).await,
            Command::Watch {
                city,
                display,
                no_auto_refresh,
            } => {
                let config = Config::load()?;
                let unit = display.units.unwrap_or_else(|| config.unit());
                let auto_refresh = config.auto_refresh() && !no_auto_refresh;
                let session = build_session(&config, Dashboard::new(unit, auto_refresh));

                watch::run(session, city, Viewport::new(display.width)).await
            }
        }
    }
}

fn build_session(config: &Config, dashboard: Dashboard) -> Session {
    let provider = OpenWeatherProvider::new(ClientConfig::from_env(config));
    Session::new(Arc::new(provider), dashboard, config.refresh_interval())
}

async fn show(city: String, display: DisplayArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let unit = display.units.unwrap_or_else(|| config.unit());
    let mut session = build_session(&config, Dashboard::new(unit, false));

    session.dispatch(Action::Submit(city));
    if session.dashboard().in_flight().is_none() {
        bail!("City name must not be empty.");
    }

    while session.dashboard().in_flight().is_some() {
        let action = session
            .next_action()
            .await
            .context("Lookup ended without a result")?;
        session.dispatch(action);
    }

    let state = session.dashboard().fetch_state();
    if let Some(error) = state.error() {
        bail!("{error}");
    }

    let report = state.result().context("Lookup ended without a result")?;
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        print!(
            "{}",
            render::render(session.dashboard(), Viewport::new(display.width), &chrono::Local)
        );
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key (leave empty to keep current):")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let units = Unit::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.unit()).unwrap_or(0);
    let unit = Select::new("Default units:", units)
        .with_starting_cursor(cursor)
        .prompt()?;
    config.units = Some(unit);

    let auto_refresh = Confirm::new("Refresh automatically while watching?")
        .with_default(config.auto_refresh())
        .prompt()?;
    config.auto_refresh = Some(auto_refresh);

    let path = config.save()?;
    tracing::debug!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}
