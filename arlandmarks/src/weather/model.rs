//! Weather data model and wire types.

use serde::Deserialize;
use thiserror::Error;

/// Wire shape of the current-weather endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherResponse {
    pub main: WeatherMain,
    pub weather: Vec<WeatherCondition>,
    #[allow(dead_code)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherMain {
    pub temp: f64,
    #[serde(rename = "feels_like")]
    pub feels_like: f64,
    pub humidity: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherCondition {
    #[allow(dead_code)]
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Current conditions, condensed for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// Temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: i64,
    /// Condition group (e.g. "Clear", "Rain").
    pub condition: String,
    /// Localized condition description.
    pub description: String,
    /// Provider icon code (e.g. "01d").
    pub icon: String,
}

impl Weather {
    /// Emoji for the provider icon code, for compact text surfaces.
    pub fn icon_emoji(&self) -> &'static str {
        match self.icon.get(..2) {
            Some("01") => "☀️",
            Some("02") => "🌤️",
            Some("03") | Some("04") => "☁️",
            Some("09") => "🌧️",
            Some("10") => "🌦️",
            Some("11") => "⛈️",
            Some("13") => "🌨️",
            Some("50") => "🌫️",
            _ => "🌡️",
        }
    }

    /// Temperature rounded to whole degrees, e.g. "10°C".
    pub fn temperature_formatted(&self) -> String {
        format!("{}°C", self.temperature.round() as i64)
    }
}

impl From<WeatherResponse> for Weather {
    fn from(response: WeatherResponse) -> Self {
        let condition = response.weather.first();
        Self {
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
            description: condition.map(|c| c.description.clone()).unwrap_or_default(),
            icon: condition.map(|c| c.icon.clone()).unwrap_or_default(),
        }
    }
}

/// Errors from the weather collaborator.
#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    /// No API key configured; the overlay omits weather entirely.
    #[error("weather API key missing")]
    MissingApiKey,

    /// The request could not be completed.
    #[error("weather request failed: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode weather response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(icon: &str) -> Weather {
        Weather {
            temperature: 9.6,
            feels_like: 7.2,
            humidity: 81,
            condition: "Clear".to_string(),
            description: "klarer Himmel".to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn test_icon_emoji_table() {
        assert_eq!(weather("01d").icon_emoji(), "☀️");
        assert_eq!(weather("01n").icon_emoji(), "☀️");
        assert_eq!(weather("04d").icon_emoji(), "☁️");
        assert_eq!(weather("10n").icon_emoji(), "🌦️");
        assert_eq!(weather("50d").icon_emoji(), "🌫️");
        assert_eq!(weather("99x").icon_emoji(), "🌡️");
        assert_eq!(weather("").icon_emoji(), "🌡️");
    }

    #[test]
    fn test_temperature_formatted_rounds() {
        assert_eq!(weather("01d").temperature_formatted(), "10°C");

        let mut cold = weather("13d");
        cold.temperature = -0.4;
        assert_eq!(cold.temperature_formatted(), "0°C");
    }

    #[test]
    fn test_from_response_without_conditions() {
        let response = WeatherResponse {
            main: WeatherMain {
                temp: 5.0,
                feels_like: 3.0,
                humidity: 70,
            },
            weather: vec![],
            name: None,
        };

        let weather = Weather::from(response);
        assert!(weather.condition.is_empty());
        assert_eq!(weather.icon_emoji(), "🌡️");
    }
}
