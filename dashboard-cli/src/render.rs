//! Text rendering of the dashboard.

use chrono::TimeZone;
use console::{Color, style};
use dashboard_core::{
    Dashboard, IconColor, IconSize, Viewport, WeatherCard, format::unit_toggle_label,
};
use std::fmt::{self, Display, Write};

pub fn render<Tz>(dashboard: &Dashboard, viewport: Viewport, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dashboard(&mut out, dashboard, viewport, tz);
    out
}

fn write_dashboard<Tz>(
    out: &mut String,
    dashboard: &Dashboard,
    viewport: Viewport,
    tz: &Tz,
) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let query = dashboard.query();
    let state = dashboard.fetch_state();

    writeln!(out, "{}", style("Weather Dashboard").bold())?;
    writeln!(
        out,
        "[Auto Refresh: {}]  [{}]",
        if query.auto_refresh { "on" } else { "off" },
        unit_toggle_label(query.unit),
    )?;
    writeln!(out)?;

    if let Some(error) = state.error() {
        writeln!(out, "{} {}", style("!").red().bold(), style(error).red())?;
    }

    match state.result() {
        Some(report) => {
            let card = WeatherCard::build(report, viewport, tz);
            let refreshing = if state.is_loading() { "  (refreshing...)" } else { "" };
            write_card(out, &card, refreshing)?;
        }
        None if state.is_loading() => writeln!(out, "Searching...")?,
        None => {}
    }

    Ok(())
}

fn write_card(out: &mut String, card: &WeatherCard, refreshing: &str) -> fmt::Result {
    let glyph = style(card.icon.kind.glyph()).fg(color_of(card.icon.color));
    let glyph = match card.icon_size {
        IconSize::Large => glyph.bold(),
        IconSize::Compact => glyph,
    };
    let temperature = style(&card.temperature).bold();

    writeln!(out, "{}{}", style(&card.location).bold(), refreshing)?;
    writeln!(out, "{}", card.observed_at)?;
    writeln!(out)?;
    writeln!(out, "{glyph}  {temperature}  {}", card.description)?;
    writeln!(out)?;
    write_row(out, ("Humidity", card.humidity.as_str()), ("Wind", card.wind.as_str()))?;
    write_row(
        out,
        ("Feels Like", card.feels_like.as_str()),
        ("Pressure", card.pressure.as_str()),
    )?;
    writeln!(out)?;
    write_row(out, ("Sunrise", card.sunrise.as_str()), ("Sunset", card.sunset.as_str()))?;
    write_row(
        out,
        ("Visibility", card.visibility.as_str()),
        ("Coordinates", card.coordinates.as_str()),
    )
}

/// Two label/value pairs on one aligned line.
fn write_row(out: &mut String, left: (&str, &str), right: (&str, &str)) -> fmt::Result {
    writeln!(out, "{:<12}{:<14}{:<12}{}", left.0, left.1, right.0, right.1)
}

fn color_of(color: IconColor) -> Color {
    match color {
        IconColor::Yellow => Color::Yellow,
        IconColor::Gray => Color::Color256(245),
        IconColor::Blue => Color::Blue,
        IconColor::LightBlue => Color::Cyan,
        IconColor::Purple => Color::Magenta,
        IconColor::LightGray => Color::Color256(250),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dashboard_core::{Action, Unit, WeatherReport};

    fn report() -> WeatherReport {
        WeatherReport {
            location_name: "Austin".into(),
            country: "US".into(),
            observed_at: 1_705_329_000,
            temperature: 22.4,
            feels_like: 21.6,
            humidity_pct: 65,
            pressure_hpa: 1013,
            wind_speed: 3.6,
            condition: "Clouds".into(),
            description: "broken clouds".into(),
            visibility_m: Some(10_000.0),
            latitude: 30.2672,
            longitude: -97.7431,
            sunrise: 1_705_324_920,
            sunset: 1_705_363_200,
            unit: Unit::Metric,
        }
    }

    fn loaded() -> Dashboard {
        let mut dash = Dashboard::default();
        dash.update(Action::Submit("Austin".into()));
        let seq = dash.in_flight().unwrap();
        dash.update(Action::FetchCompleted { seq, outcome: Ok(report()) });
        dash
    }

    #[test]
    fn idle_dashboard_shows_controls_only() {
        let out = render(&Dashboard::default(), Viewport::default(), &Utc);
        assert!(out.contains("Auto Refresh: on"));
        assert!(out.contains("Switch to °F"));
        assert!(!out.contains("Searching"));
    }

    #[test]
    fn first_lookup_shows_searching() {
        let mut dash = Dashboard::default();
        dash.update(Action::Submit("Austin".into()));

        let out = render(&dash, Viewport::default(), &Utc);
        assert!(out.contains("Searching..."));
    }

    #[test]
    fn loaded_dashboard_shows_card() {
        let out = render(&loaded(), Viewport::default(), &Utc);

        assert!(out.contains("Austin, US"));
        assert!(out.contains("22°C"));
        assert!(out.contains("Broken Clouds"));
        assert!(out.contains("1013 hPa"));
        assert!(out.contains("10.0 km"));
        assert!(out.contains("30.27, -97.74"));
        assert!(out.contains("Monday, January 15, 2024"));
    }

    #[test]
    fn refresh_keeps_card_and_marks_it() {
        let mut dash = loaded();
        dash.update(Action::Refresh);

        let out = render(&dash, Viewport::default(), &Utc);
        assert!(out.contains("Austin, US"));
        assert!(out.contains("(refreshing...)"));
        assert!(!out.contains("Searching..."));
    }

    #[test]
    fn narrow_viewport_uses_short_date() {
        let out = render(&loaded(), Viewport::new(375), &Utc);
        assert!(out.contains("Mon, Jan 15"));
    }
}
