use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const FORECAST_DAYS: usize = 3;
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Unit system, named after the `units` parameter of OpenWeatherMap.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }

    /// Convert a wind speed as returned by the provider (m/s for metric, mph for imperial)
    /// to the displayed unit (km/h or mph).
    pub fn display_wind_speed(&self, provider_speed: f64) -> f64 {
        match self {
            Units::Metric => provider_speed * 3.6,
            Units::Imperial => provider_speed,
        }
    }

    /// Wind chill, or `None` when conditions are too warm or too calm for it to apply.
    /// Temperature and speed are in displayed units.
    pub fn wind_chill(&self, temperature: f64, wind_speed: f64) -> Option<f64> {
        match self {
            Units::Imperial if temperature <= 50.0 && wind_speed > 3.0 => {
                let factor = wind_speed.powf(0.16);
                Some(35.74 + 0.6215 * temperature - 35.75 * factor + 0.4275 * temperature * factor)
            }
            Units::Metric if temperature <= 10.0 && wind_speed > 4.8 => {
                let factor = wind_speed.powf(0.16);
                Some(13.12 + 0.6215 * temperature - 11.37 * factor + 0.3965 * temperature * factor)
            }
            _ => None,
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(format!("Unknown units: {s}")),
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn icon_url(icon: &str, large: bool) -> String {
    if large {
        format!("{ICON_BASE_URL}/{icon}@2x.png")
    } else {
        format!("{ICON_BASE_URL}/{icon}.png")
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct CurrentConditions {
    temperature: f64,
    feels_like: f64,
    humidity: f64,
    /// Short condition name, such as `Clouds`.
    condition: String,
    description: String,
    icon: String,
    wind_speed: f64,
    wind_chill: Option<f64>,
}

impl CurrentConditions {
    /// Build current conditions. `wind_speed` is in displayed units.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        units: Units,
        temperature: f64,
        feels_like: f64,
        humidity: f64,
        condition: String,
        description: String,
        icon: String,
        wind_speed: f64,
    ) -> Self {
        Self {
            temperature,
            feels_like,
            humidity,
            condition,
            description,
            icon,
            wind_speed,
            wind_chill: units.wind_chill(temperature, wind_speed),
        }
    }
}

/// A single forecast sample, as returned every three hours by the provider.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct ForecastEntry {
    date: NaiveDate,
    temperature: f64,
    icon: String,
    description: String,
}

impl ForecastEntry {
    pub fn new(date: NaiveDate, temperature: f64, icon: String, description: String) -> Self {
        Self {
            date,
            temperature,
            icon,
            description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct ForecastDay {
    date: NaiveDate,
    /// Abbreviated week day, such as `Mon`.
    day: String,
    temperature: f64,
    icon: String,
    description: String,
}

/// Keep the first sample of each of the next `days` days, today excluded.
pub fn daily_forecast<I>(entries: I, today: NaiveDate, days: usize) -> Vec<ForecastDay>
where
    I: IntoIterator<Item = ForecastEntry>,
{
    let mut forecast: Vec<ForecastDay> = vec![];
    for entry in entries {
        if forecast.len() >= days {
            break;
        }
        if entry.date <= today || forecast.iter().any(|day| day.date == entry.date) {
            continue;
        }
        forecast.push(ForecastDay {
            date: entry.date,
            day: entry.date.format("%a").to_string(),
            temperature: entry.temperature,
            icon: entry.icon,
            description: entry.description,
        });
    }
    forecast
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct WeatherReport {
    city: String,
    units: Units,
    current: CurrentConditions,
    forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    pub fn new(
        city: String,
        units: Units,
        current: CurrentConditions,
        forecast: Vec<ForecastDay>,
    ) -> Self {
        Self {
            city,
            units,
            current,
            forecast,
        }
    }
}
