//! Query controller for the dashboard.
//!
//! [`Dashboard::update`] is a pure reducer: it applies one [`Action`] to the
//! query and fetch state and returns the [`Effect`]s the caller must run.
//! Nothing here performs I/O or touches a clock, so every transition can be
//! checked without a runtime.

use crate::{
    model::{Unit, WeatherReport, WeatherRequest},
    provider::LookupError,
    state::FetchState,
};

/// What the user has asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub city_input: String,
    pub unit: Unit,
    pub auto_refresh: bool,
}

/// One lookup to run. `seq` increases with every fetch the controller starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: WeatherRequest,
}

#[derive(Debug)]
pub enum Action {
    Submit(String),
    Refresh,
    ToggleUnit,
    SetAutoRefresh(bool),
    ToggleAutoRefresh,
    /// Posted by the refresh timer started with the same `generation`.
    RefreshTick { generation: u64 },
    FetchCompleted {
        seq: u64,
        outcome: Result<WeatherReport, LookupError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchTicket),
    /// Replace any running refresh timer with a new one.
    StartRefreshTimer { generation: u64 },
    StopRefreshTimer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RefreshTimer {
    generation: u64,
    city: String,
    unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    query: QueryState,
    submitted: Option<String>,
    fetch: FetchState,
    last_seq: u64,
    in_flight: Option<u64>,
    timer: Option<RefreshTimer>,
    last_generation: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Unit::default(), true)
    }
}

impl Dashboard {
    pub fn new(unit: Unit, auto_refresh: bool) -> Self {
        Self {
            query: QueryState {
                city_input: String::new(),
                unit,
                auto_refresh,
            },
            submitted: None,
            fetch: FetchState::Idle,
            last_seq: 0,
            in_flight: None,
            timer: None,
            last_generation: 0,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Last city that was submitted, if any.
    pub fn submitted_city(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    /// Generation of the refresh timer that should be running.
    pub fn refresh_timer(&self) -> Option<u64> {
        self.timer.as_ref().map(|t| t.generation)
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();

        match action {
            Action::Submit(city) => {
                let city = city.trim();
                if city.is_empty() {
                    return effects;
                }
                if self.fetch.is_loading() {
                    tracing::debug!(%city, "submit ignored while a lookup is running");
                    return effects;
                }
                self.query.city_input = city.to_string();
                self.submitted = Some(city.to_string());
                effects.extend(self.refetch());
            }
            Action::Refresh => effects.extend(self.refetch()),
            Action::ToggleUnit => {
                self.query.unit = self.query.unit.toggled();
                effects.extend(self.refetch());
            }
            Action::SetAutoRefresh(enabled) => self.query.auto_refresh = enabled,
            Action::ToggleAutoRefresh => self.query.auto_refresh = !self.query.auto_refresh,
            Action::RefreshTick { generation } => {
                if self.refresh_timer() != Some(generation) {
                    tracing::debug!(generation, "ignoring tick from a stopped refresh timer");
                } else if self.in_flight.is_some() {
                    tracing::debug!(generation, "skipping refresh tick, lookup still running");
                } else {
                    effects.extend(self.refetch());
                }
            }
            Action::FetchCompleted { seq, outcome } => self.complete(seq, outcome),
        }

        self.plan_timer(&mut effects);
        effects
    }

    /// Starts a lookup for the submitted city in the current unit.
    fn refetch(&mut self) -> Option<Effect> {
        let city = self.submitted.clone()?;

        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        self.fetch = std::mem::take(&mut self.fetch).begin();

        Some(Effect::Fetch(FetchTicket {
            seq: self.last_seq,
            request: WeatherRequest {
                city,
                unit: self.query.unit,
            },
        }))
    }

    fn complete(&mut self, seq: u64, outcome: Result<WeatherReport, LookupError>) {
        if self.in_flight != Some(seq) {
            tracing::debug!(seq, latest = ?self.in_flight, "discarding superseded lookup result");
            return;
        }
        self.in_flight = None;

        let state = std::mem::take(&mut self.fetch);
        self.fetch = match outcome {
            Ok(report) => {
                tracing::info!(city = %report.location_name, seq, "weather updated");
                state.succeed(report)
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "weather lookup failed");
                state.fail()
            }
        };
    }

    /// Keeps exactly one timer alive for the current city and unit while
    /// auto-refresh is on, and none otherwise.
    fn plan_timer(&mut self, effects: &mut Vec<Effect>) {
        let wanted = match (&self.submitted, self.query.auto_refresh) {
            (Some(city), true) => Some((city.as_str(), self.query.unit)),
            _ => None,
        };
        let running = self.timer.as_ref().map(|t| (t.city.as_str(), t.unit));
        if wanted == running {
            return;
        }

        let wanted = wanted.map(|(city, unit)| (city.to_string(), unit));

        if self.timer.take().is_some() {
            effects.push(Effect::StopRefreshTimer);
        }

        if let Some((city, unit)) = wanted {
            self.last_generation += 1;
            let generation = self.last_generation;
            tracing::debug!(%city, %unit, generation, "starting refresh timer");
            self.timer = Some(RefreshTimer { generation, city, unit });
            effects.push(Effect::StartRefreshTimer { generation });
        }
    }
}
