//! Fixed catalog of the Sun and the eight planets
//!
//! Distances are aphelion distances and speeds the matching aphelion
//! speeds, so the default initial condition places each planet on the
//! +X axis moving in +Y. That is an approximate orbit construction,
//! not an exact one; it is kept as-is for behavioral parity.

pub const SUN_NAME: &str = "Sun";
pub const SUN_MASS: f64 = 1.98892e30; // kg
pub const SUN_RADIUS: f64 = 6.9634e8; // m
pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Color given to the optional extra body.
pub const EXTRA_BODY_COLOR: [f32; 3] = [1.0, 0.0, 1.0];

/// One catalog planet: everything needed to build its default state.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub distance: f64, // aphelion distance from the Sun, m
    pub radius: f64, // physical radius, m
    pub mass: f64, // kg
    pub aphelion_speed: f64, // m/s, along +Y at the default position
    pub color: [f32; 3],
}

pub const PLANETS: [CatalogEntry; 8] = [
    CatalogEntry {
        name: "Mercury",
        distance: 6.98173e10,
        radius: 2.44e6,
        mass: 3.285e23,
        aphelion_speed: 38860.0,
        color: [1.0, 0.6, 0.0],
    },
    CatalogEntry {
        name: "Venus",
        distance: 1.0894e11,
        radius: 6.052e6,
        mass: 4.867e24,
        aphelion_speed: 34790.0,
        color: [1.0, 1.0, 1.0],
    },
    CatalogEntry {
        name: "Earth",
        distance: 1.52096e11,
        radius: 6.371e6,
        mass: 5.972e24,
        aphelion_speed: 29290.0,
        color: [0.0, 0.0, 1.0],
    },
    CatalogEntry {
        name: "Mars",
        distance: 2.49233e11,
        radius: 3.39e6,
        mass: 6.39e23,
        aphelion_speed: 21970.0,
        color: [1.0, 0.0, 0.0],
    },
    CatalogEntry {
        name: "Jupiter",
        distance: 8.16038e11,
        radius: 6.991e7,
        mass: 1.898e27,
        aphelion_speed: 12440.0,
        color: [1.0, 0.6, 0.0],
    },
    CatalogEntry {
        name: "Saturn",
        distance: 1.50724e12,
        radius: 5.823e7,
        mass: 5.683e26,
        aphelion_speed: 9090.0,
        color: [1.0, 1.0, 0.0],
    },
    CatalogEntry {
        name: "Uranus",
        distance: 3.01104e12,
        radius: 2.536e7,
        mass: 8.681e25,
        aphelion_speed: 6490.0,
        color: [0.0, 1.0, 1.0],
    },
    CatalogEntry {
        name: "Neptune",
        distance: 4.54594e12,
        radius: 2.462e7,
        mass: 1.024e26,
        aphelion_speed: 5370.0,
        color: [0.0, 0.0, 1.0],
    },
];
