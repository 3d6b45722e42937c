use chrono::TimeZone;
use std::fmt::Display;

use crate::{
    condition::{Icon, IconSize, icon_for},
    format::{self, Viewport},
    model::WeatherReport,
};

/// Display-ready strings for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub location: String,
    pub observed_at: String,
    pub icon: Icon,
    pub icon_size: IconSize,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub feels_like: String,
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
    pub visibility: String,
    pub coordinates: String,
}

impl WeatherCard {
    /// Values are suffixed in the unit the report was fetched in.
    pub fn build<Tz>(report: &WeatherReport, viewport: Viewport, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let unit = report.unit;

        Self {
            location: format!("{}, {}", report.location_name, report.country),
            observed_at: format::format_timestamp(report.observed_at, viewport, tz),
            icon: icon_for(report.condition()),
            icon_size: IconSize::for_viewport(viewport),
            temperature: format::format_temperature(report.temperature, unit),
            description: format::capitalize_words(&report.description),
            humidity: format::format_humidity(report.humidity_pct),
            wind: format::format_wind(report.wind_speed, unit),
            feels_like: format::format_temperature(report.feels_like, unit),
            pressure: format::format_pressure(report.pressure_hpa),
            sunrise: format::format_clock(report.sunrise, tz),
            sunset: format::format_clock(report.sunset, tz),
            visibility: report
                .visibility_m
                .map(format::format_visibility)
                .unwrap_or_else(|| "N/A".to_string()),
            coordinates: format::format_coordinates(report.latitude, report.longitude),
        }
    }
}
