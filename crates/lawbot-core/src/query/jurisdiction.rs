//! Jurisdiction hint attached to every query.

use super::catalog::{self, DEFAULT_COUNTRY};
use crate::error::{LawbotError, Result};
use serde::{Deserialize, Serialize};

/// Where the user's legal issue is located.
///
/// The state doubles as the location hint sent to the backend. The city is a
/// refinement of the state and never outlives a change of state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    country: String,
    state: Option<String>,
    city: Option<String>,
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            state: None,
            city: None,
        }
    }
}

impl Jurisdiction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a jurisdiction from stored profile values, dropping a city that
    /// does not fit the state.
    pub fn from_profile(state: Option<&str>, city: Option<&str>) -> Self {
        let mut jurisdiction = Self::default();
        jurisdiction.select_state(state);
        if let Some(city) = city
            && jurisdiction.select_city(city).is_err()
        {
            tracing::debug!("[Jurisdiction] Ignoring profile city '{}' outside state", city);
        }
        jurisdiction
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Selects a state (or clears it with `None`/blank). Always clears the city.
    pub fn select_state(&mut self, state: Option<&str>) {
        self.state = state
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self.city = None;
    }

    /// Selects a city within the current state.
    ///
    /// For catalog regions the city must be one of the region's cities;
    /// free-text states accept any city.
    pub fn select_city(&mut self, city: &str) -> Result<()> {
        let city = city.trim();
        let Some(state) = self.state.as_deref() else {
            return Err(LawbotError::validation("Select a state before choosing a city."));
        };

        if city.is_empty() {
            self.city = None;
            return Ok(());
        }

        if let Some(cities) = catalog::cities_for(state)
            && !cities.contains(&city)
        {
            return Err(LawbotError::validation(format!(
                "'{}' is not a city of {}.",
                city, state
            )));
        }

        self.city = Some(city.to_string());
        Ok(())
    }

    pub fn clear_city(&mut self) {
        self.city = None;
    }

    /// Location hint for the backend: the state when selected, else the country.
    pub fn location_hint(&self) -> &str {
        self.state.as_deref().unwrap_or(&self.country)
    }

    /// Cities the picker should offer for the current state.
    pub fn available_cities(&self) -> &'static [&'static str] {
        self.state
            .as_deref()
            .and_then(catalog::cities_for)
            .unwrap_or(&[])
    }
}
