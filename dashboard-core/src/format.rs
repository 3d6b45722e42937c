//! Pure display formatting for report values.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::model::Unit;

/// Viewports narrower than this use the short date form.
pub const NARROW_VIEWPORT_PX: u32 = 768;

const METERS_PER_SECOND_TO_KMH: f64 = 3.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32) -> Self {
        Self { width_px }
    }

    pub fn is_narrow(&self) -> bool {
        self.width_px < NARROW_VIEWPORT_PX
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Long form on wide viewports, short form on narrow ones.
pub fn format_timestamp<Tz>(ts: i64, viewport: Viewport, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if viewport.is_narrow() {
        "%a, %b %-d, %I:%M %p"
    } else {
        "%A, %B %-d, %Y at %I:%M %p"
    };
    format_with(ts, tz, pattern)
}

/// Hour and minute only, as used for sunrise and sunset.
pub fn format_clock<Tz>(ts: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_with(ts, tz, "%I:%M %p")
}

fn format_with<Tz>(ts: i64, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp(ts, 0) {
        Some(utc) => utc.with_timezone(tz).format(pattern).to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Rounds half toward positive infinity, so -2.5 displays as -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn format_temperature(degrees: f64, unit: Unit) -> String {
    format!("{}{}", round_half_up(degrees), unit.temperature_suffix())
}

pub fn format_visibility(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Metric speeds arrive in m/s and are shown in km/h.
pub fn format_wind(speed: f64, unit: Unit) -> String {
    let shown = match unit {
        Unit::Metric => speed * METERS_PER_SECOND_TO_KMH,
        Unit::Imperial => speed,
    };
    format!("{:.1} {}", shown, unit.speed_suffix())
}

pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

pub fn format_humidity(pct: u8) -> String {
    format!("{pct}%")
}

pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{lat:.2}, {lon:.2}")
}

/// Upper-cases the first letter of every word.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label of the control that switches to the other unit system.
pub fn unit_toggle_label(current: Unit) -> String {
    format!("Switch to {}", current.toggled().temperature_suffix())
}
