//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable description of
//! one simulation run:
//!
//! - [`OverrideConfig`]  – replacement starting vectors for one planet
//! - [`ExtraBodyConfig`] – one optional extra body (comet, asteroid, ...)
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! All numbers are plain SI (meters, meters per second, kilograms); the
//! engine converts them to its internal length-scale units on
//! ingestion. An empty document is a valid scenario and yields the
//! standard solar system.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! overrides:
//!   Earth:                                # planet name from the catalog
//!     position: [0.0, 1.52096e11, 0.0]    # m, replaces the default wholesale
//!     velocity: [-29290.0, 0.0, 0.0]      # m/s, replaces the default wholesale
//!   Mars:
//!     velocity: [0.0, 26000.0, 0.0]       # position keeps its default
//!
//! extra:
//!   name: Comet
//!   mass: 2.2e14          # kg
//!   radius: 1.0e6         # m
//!   position: [3.0e11, 5.0e10, 0.0]
//!   velocity: [-15000.0, 5000.0, 2000.0]
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Replacement starting vectors for one catalog planet
/// A present field replaces the default vector in full; an absent field
/// keeps the catalog default
#[derive(Deserialize, Debug, Default)]
pub struct OverrideConfig {
    pub position: Option<[f64; 3]>, // m
    pub velocity: Option<[f64; 3]>, // m/s
}

/// One extra body appended after the catalog planets
/// There is no default state: every field must be supplied
#[derive(Deserialize, Debug)]
pub struct ExtraBodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub radius: f64, // m
    pub position: [f64; 3], // m
    pub velocity: [f64; 3], // m/s
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub overrides: HashMap<String, OverrideConfig>, // keyed by planet name
    #[serde(default)]
    pub extra: Option<ExtraBodyConfig>, // at most one extra body
}
