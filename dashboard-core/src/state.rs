use crate::model::WeatherReport;

/// Message shown for every failed lookup.
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found. Please try again.";

/// Outcome of the most recent lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Nothing has been fetched yet.
    #[default]
    Idle,
    /// A lookup is running. `previous` keeps the last report on screen.
    Loading { previous: Option<WeatherReport> },
    Loaded(WeatherReport),
    Failed(String),
}

impl FetchState {
    pub fn begin(self) -> Self {
        let previous = match self {
            FetchState::Loaded(report) => Some(report),
            FetchState::Loading { previous } => previous,
            FetchState::Idle | FetchState::Failed(_) => None,
        };
        FetchState::Loading { previous }
    }

    pub fn succeed(self, report: WeatherReport) -> Self {
        FetchState::Loaded(report)
    }

    /// Any earlier report is dropped.
    pub fn fail(self) -> Self {
        FetchState::Failed(LOOKUP_FAILED_MESSAGE.to_string())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The report currently on screen, including while a refresh is running.
    pub fn result(&self) -> Option<&WeatherReport> {
        match self {
            FetchState::Loaded(report) => Some(report),
            FetchState::Loading { previous } => previous.as_ref(),
            FetchState::Idle | FetchState::Failed(_) => None,
        }
    }
}
