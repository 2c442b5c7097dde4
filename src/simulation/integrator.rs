//! Fixed-step time integrator for the solar system
//!
//! One tick is a semi-implicit (symplectic) Euler step: accelerations
//! are snapshotted for every body from the current positions, then each
//! body's velocity is advanced before its position so the position
//! update uses the already-updated velocity. That ordering, not plain
//! explicit Euler, is what keeps orbits bounded over long runs.

use super::states::{System, NVec3};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system by one tick of `params.dt` simulated seconds
///
/// Evaluate phase: one acceleration snapshot is taken at time `t`; no
/// body sees another body's already-updated position within the tick.
/// Advance phase: per body, `v += dt * a` then `x += dt * v`.
///
/// Known limitation: there are no finiteness checks — extreme
/// user-supplied masses or velocities can push NaN/infinity into
/// subsequent ticks without a diagnostic.
pub fn euler_symplectic(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt; // time step dt, fixed

    // Accelerations at time t, all from the same position snapshot
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick then drift with the new velocity:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
