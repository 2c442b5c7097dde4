//! Core state types for the solar-system simulation.
//!
//! Defines the body/system structs:
//! - `Body` with position/velocity stored in length-scale units (`NVec3`)
//! - `System` holding the body roster and the current simulation time `t`
//! - `BodyFrame`, the per-body render snapshot published after each tick
//!
//! Index 0 of `System::bodies` is the Sun by construction.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display name, opaque to the physics
    pub color: [f32; 3], // display color, opaque to the physics
    pub x: NVec3, // position, length-scale units
    pub v: NVec3, // velocity, length-scale units per second
    pub m: f64, // mass, kg
    pub radius: f64, // radius, length-scale units (presentation only)
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // roster, Sun at index 0
    pub t: f64, // simulated seconds
}

/// Per-body snapshot handed to a renderer: enough to draw a sphere and
/// keep a trail or label anchored. The physics never reads these back.
#[derive(Debug, Clone)]
pub struct BodyFrame {
    pub name: String,
    pub color: [f32; 3],
    pub position: NVec3, // length-scale units
    pub radius: f64, // length-scale units
    pub label_anchor: NVec3, // position + (0, 2 * radius, 0)
}

impl System {
    /// Snapshot every body for rendering.
    pub fn frames(&self) -> Vec<BodyFrame> {
        self.bodies
            .iter()
            .map(|b| BodyFrame {
                name: b.name.clone(),
                color: b.color,
                position: b.x,
                radius: b.radius,
                label_anchor: b.x + NVec3::new(0.0, 2.0 * b.radius, 0.0),
            })
            .collect()
    }
}
