//! Input payload models for havaplan
//!
//! This module contains the serde models for the stdin request envelope and
//! the extraction of a single day's weather metrics out of the daily series.
//!
//! Parsing is deliberately lenient: every envelope field carries a default so
//! that a *missing* field is only detected when the recommendation builder
//! tries to read it (and can degrade gracefully), while malformed JSON or a
//! wrong type still fails the top-level parse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while extracting metrics from a request envelope
#[derive(Debug, Error)]
pub enum InputError {
    /// The weather payload has no `daily` block
    #[error("weather payload has no daily block")]
    MissingDaily,

    /// A required daily series is absent or empty
    #[error("daily series '{0}' is absent or empty")]
    MissingSeries(&'static str),

    /// A required comfort index field is absent
    #[error("comfort index field '{0}' is absent")]
    MissingComfortField(&'static str),
}

/// The full stdin request envelope.
///
/// Field names follow the upstream Open-Meteo daily naming so payloads can be
/// forwarded without renaming.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Weather payload containing the daily series
    #[serde(default)]
    pub weather_data: WeatherEnvelope,
    /// Opaque auxiliary dataset, passed through and never read by scoring
    #[serde(default)]
    pub nasa_data: Option<serde_json::Value>,
    /// Precomputed comfort index produced upstream
    #[serde(default)]
    pub comfort_index: ComfortIndex,
    /// Location label for the report footer
    #[serde(default)]
    pub location: String,
    /// Date label for the report footer
    #[serde(default)]
    pub date: String,
    /// Free-text event type, matched against activity categories
    #[serde(default)]
    pub event_type: Option<String>,
}

impl RecommendationRequest {
    /// Returns the event type, falling back to the generic default.
    pub fn event_type(&self) -> &str {
        self.event_type.as_deref().unwrap_or("outdoor activity")
    }
}

/// Wrapper around the daily forecast series
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherEnvelope {
    /// Daily forecast series, if present
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

/// Daily forecast series as parallel arrays.
///
/// Only index 0 of each array is ever consulted (single-day forecast
/// assumption inherited from the upstream pipeline).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    /// Daily maximum temperature in Celsius
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    /// Daily minimum temperature in Celsius
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    /// Daily maximum wind speed in km/h
    #[serde(default)]
    pub windspeed_10m_max: Vec<f64>,
    /// Daily maximum relative humidity percentage
    #[serde(default)]
    pub relative_humidity_2m_max: Vec<f64>,
    /// Daily precipitation sum in mm
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
    /// Daily maximum UV index (optional series, defaults to 0)
    #[serde(default)]
    pub uv_index_max: Vec<f64>,
    /// Visibility in km (optional series, defaults to 10)
    #[serde(default)]
    pub visibility: Vec<f64>,
}

/// Comfort index computed upstream; only `score` and `level` are read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComfortIndex {
    /// Comfort score, 0-100
    #[serde(default)]
    pub score: Option<i64>,
    /// Human-readable comfort level label
    #[serde(default)]
    pub level: Option<String>,
    /// Contributing issues, carried for display upstream and unused here
    #[serde(default)]
    pub issues: Vec<String>,
}

/// The stdout response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// The formatted recommendation text
    pub recommendation: String,
}

/// A single day's weather metrics, extracted from the daily series.
#[derive(Debug, Clone, Copy)]
pub struct WeatherMetrics {
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Maximum wind speed in km/h
    pub wind: f64,
    /// Maximum relative humidity percentage
    pub humidity: f64,
    /// Precipitation sum in mm
    pub precipitation: f64,
    /// Maximum UV index
    pub uv_index: f64,
    /// Visibility in km
    pub visibility: f64,
}

impl WeatherMetrics {
    /// Extracts the first day's metrics from a daily series.
    ///
    /// Temperature, wind, humidity and precipitation are required; UV index
    /// defaults to 0 and visibility to 10 km when their series are absent.
    pub fn from_daily(daily: &DailySeries) -> Result<Self, InputError> {
        fn first(series: &[f64], name: &'static str) -> Result<f64, InputError> {
            series
                .first()
                .copied()
                .ok_or(InputError::MissingSeries(name))
        }

        Ok(Self {
            temp_max: first(&daily.temperature_2m_max, "temperature_2m_max")?,
            temp_min: first(&daily.temperature_2m_min, "temperature_2m_min")?,
            wind: first(&daily.windspeed_10m_max, "windspeed_10m_max")?,
            humidity: first(&daily.relative_humidity_2m_max, "relative_humidity_2m_max")?,
            precipitation: first(&daily.precipitation_sum, "precipitation_sum")?,
            uv_index: daily.uv_index_max.first().copied().unwrap_or(0.0),
            visibility: daily.visibility.first().copied().unwrap_or(10.0),
        })
    }

    /// Extracts metrics from a request envelope.
    pub fn from_request(request: &RecommendationRequest) -> Result<Self, InputError> {
        let daily = request
            .weather_data
            .daily
            .as_ref()
            .ok_or(InputError::MissingDaily)?;
        Self::from_daily(daily)
    }

    /// Average of the daily maximum and minimum temperatures.
    pub fn average_temperature(&self) -> f64 {
        (self.temp_max + self.temp_min) / 2.0
    }

    /// Spread between the daily maximum and minimum temperatures.
    pub fn temperature_range(&self) -> f64 {
        self.temp_max - self.temp_min
    }

    /// Perceived temperature under humidity.
    ///
    /// Linear heuristic, not a meteorological standard.
    pub fn heat_index(&self) -> f64 {
        self.average_temperature() + (self.humidity - 50.0) * 0.1
    }

    /// Perceived temperature under wind.
    ///
    /// Linear heuristic, not a meteorological standard.
    pub fn wind_chill(&self) -> f64 {
        self.average_temperature() - self.wind * 0.7
    }
}
