//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the Sun, the catalog planets, and an
//!   optional extra body at t = 0, total momentum zeroed)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by
//! the integration and visualization systems, or handed to the
//! headless runner. Construction is the only place configuration
//! errors can surface; the roster is structurally immutable afterwards.

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::{ScenarioConfig, OverrideConfig};
use crate::simulation::catalog::{self, CatalogEntry};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec3};

/// Configuration errors raised synchronously while building a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("body {name:?} has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("override refers to unknown body {0:?}")]
    UnknownBody(String),
}

/// Runtime bundle for one simulation run
///
/// Owned exclusively by whichever loop drives it (the Bevy app or the
/// headless runner); there is exactly one writer for its lifetime
#[derive(Debug, Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Build the full roster from the catalog, per-planet overrides,
    /// and the optional extra body, then zero the total momentum
    ///
    /// All incoming vectors are SI (meters, meters per second) and are
    /// divided by `scale` on ingestion; radii likewise.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let parameters = Parameters::default();
        let scale = parameters.scale;

        // An override naming a body outside the catalog is a malformed
        // scenario, not something to silently drop
        for name in cfg.overrides.keys() {
            if !catalog::PLANETS.iter().any(|p| p.name == name.as_str()) {
                return Err(ScenarioError::UnknownBody(name.clone()));
            }
        }

        // Sun first, at the origin, at rest. Momentum normalization
        // below gives it its actual starting velocity.
        let mut bodies = vec![Body {
            name: catalog::SUN_NAME.to_string(),
            color: catalog::SUN_COLOR,
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            m: catalog::SUN_MASS,
            radius: catalog::SUN_RADIUS / scale,
        }];

        // Every catalog planet exactly once, in catalog order
        for entry in catalog::PLANETS.iter() {
            bodies.push(planet_body(entry, cfg.overrides.get(entry.name), scale));
        }

        // At most one extra body, appended last, fields taken verbatim
        if let Some(extra) = cfg.extra {
            if extra.mass <= 0.0 {
                return Err(ScenarioError::NonPositiveMass {
                    name: extra.name,
                    mass: extra.mass,
                });
            }
            bodies.push(Body {
                name: extra.name,
                color: catalog::EXTRA_BODY_COLOR,
                x: NVec3::from(extra.position) / scale,
                v: NVec3::from(extra.velocity) / scale,
                m: extra.mass,
                radius: extra.radius / scale,
            });
        }

        let mut system = System { bodies, t: 0.0 };
        zero_total_momentum(&mut system);

        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            scale: parameters.scale,
        });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

/// Default state for one catalog planet, with override vectors applied
/// wholesale: a supplied position or velocity replaces the default
/// entirely, a missing one keeps it
fn planet_body(entry: &CatalogEntry, ov: Option<&OverrideConfig>, scale: f64) -> Body {
    // Default: on the +X axis, moving in +Y at aphelion speed
    let mut x = NVec3::new(entry.distance / scale, 0.0, 0.0);
    let mut v = NVec3::new(0.0, entry.aphelion_speed / scale, 0.0);

    if let Some(ov) = ov {
        if let Some(p) = ov.position {
            x = NVec3::from(p) / scale;
        }
        if let Some(vel) = ov.velocity {
            v = NVec3::from(vel) / scale;
        }
    }

    Body {
        name: entry.name.to_string(),
        color: entry.color,
        x,
        v,
        m: entry.mass,
        radius: entry.radius / scale,
    }
}

/// Set the central body's velocity so total linear momentum is exactly
/// zero, keeping the system from drifting off-frame over long runs
///
/// Runs once, after construction and before the first tick. Whatever
/// velocity body 0 carried is overwritten — always zero by convention
/// today, but a future central-body override would be silently
/// discarded here.
pub fn zero_total_momentum(system: &mut System) {
    if system.bodies.is_empty() {
        return;
    }
    let mut momentum = NVec3::zeros();
    for body in system.bodies.iter().skip(1) {
        momentum += body.m * body.v;
    }
    system.bodies[0].v = -momentum / system.bodies[0].m;
}
