//! Condition labels and the icon shown for each of them.

use crate::format::Viewport;

/// Primary weather category reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Mist,
    Smoke,
    Haze,
    Fog,
    Unrecognized,
}

impl Condition {
    /// Labels are matched exactly, as the provider sends them.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            "Mist" => Self::Mist,
            "Smoke" => Self::Smoke,
            "Haze" => Self::Haze,
            "Fog" => Self::Fog,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    DaySunny,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DaySunny => "day-sunny",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Fog => "fog",
        }
    }

    /// Glyph used by text front ends.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::DaySunny => "☀",
            Self::Cloudy => "☁",
            Self::Rain => "🌧",
            Self::Snow => "❄",
            Self::Thunderstorm => "⛈",
            Self::Fog => "🌫",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconColor {
    Yellow,
    Gray,
    Blue,
    LightBlue,
    Purple,
    LightGray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub kind: IconKind,
    pub color: IconColor,
}

/// Unrecognized conditions fall back to the clear-sky icon.
pub fn icon_for(condition: Condition) -> Icon {
    let (kind, color) = match condition {
        Condition::Clear => (IconKind::DaySunny, IconColor::Yellow),
        Condition::Clouds => (IconKind::Cloudy, IconColor::Gray),
        Condition::Rain | Condition::Drizzle => (IconKind::Rain, IconColor::Blue),
        Condition::Snow => (IconKind::Snow, IconColor::LightBlue),
        Condition::Thunderstorm => (IconKind::Thunderstorm, IconColor::Purple),
        Condition::Mist | Condition::Smoke | Condition::Haze | Condition::Fog => {
            (IconKind::Fog, IconColor::LightGray)
        }
        Condition::Unrecognized => (IconKind::DaySunny, IconColor::Yellow),
    };

    Icon { kind, color }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Compact,
    Large,
}

impl IconSize {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_narrow() { Self::Compact } else { Self::Large }
    }
}
