use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::condition::Condition;

/// Measurement convention requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    /// Value sent as the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Unit::Metric => "km/h",
            Unit::Imperial => "mph",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Metric, Unit::Imperial]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(Unit::Metric),
            "imperial" => Ok(Unit::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported values: metric, imperial."
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub unit: Unit,
}

/// Current conditions for one city, as returned by a provider.
///
/// Speeds are in the provider's native unit for `unit`: metres per second
/// for metric, miles per hour for imperial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub country: String,
    pub observed_at: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed: f64,
    pub condition: String,
    pub description: String,
    pub visibility_m: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub unit: Unit,
}

impl WeatherReport {
    pub fn condition(&self) -> Condition {
        Condition::from_label(&self.condition)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn report(city: &str, unit: Unit) -> WeatherReport {
        WeatherReport {
            location_name: city.to_string(),
            country: "US".to_string(),
            observed_at: 1_705_329_000,
            temperature: 22.4,
            feels_like: 21.6,
            humidity_pct: 65,
            pressure_hpa: 1013,
            wind_speed: 3.6,
            condition: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            visibility_m: Some(10_000.0),
            latitude: 30.2672,
            longitude: -97.7431,
            sunrise: 1_705_324_920,
            sunset: 1_705_363_200,
            unit,
        }
    }
}
