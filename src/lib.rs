pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyFrame, NVec3, System};
pub use simulation::params::Parameters;
pub use simulation::catalog::{CatalogEntry, PLANETS, SUN_MASS, SUN_NAME, SUN_RADIUS};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::euler_symplectic;
pub use simulation::scenario::{Scenario, ScenarioError, zero_total_momentum};
pub use simulation::pacer::{Pacer, run_headless};

pub use configuration::config::{ExtraBodyConfig, OverrideConfig, ScenarioConfig};

pub use visualization::solar_vis::run_viewer;

pub use benchmark::benchmark::{bench_gravity, bench_step};
