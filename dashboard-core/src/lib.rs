//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration & API key resolution
//! - The provider seam and the OpenWeather client
//! - The dashboard controller (a pure reducer) and the async session that drives it
//! - Condition icons and display formatting
//!
//! It is used by `dashboard-cli`, but nothing in it depends on a terminal.

pub mod condition;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod model;
pub mod provider;
pub mod session;
pub mod state;
pub mod view;

pub use condition::{Condition, Icon, IconColor, IconKind, IconSize, icon_for};
pub use config::{ClientConfig, Config};
pub use dashboard::{Action, Dashboard, Effect, FetchTicket, QueryState};
pub use format::Viewport;
pub use model::{Unit, WeatherReport, WeatherRequest};
pub use provider::{LookupError, OpenWeatherProvider, WeatherProvider};
pub use session::Session;
pub use state::{FetchState, LOOKUP_FAILED_MESSAGE};
pub use view::WeatherCard;
